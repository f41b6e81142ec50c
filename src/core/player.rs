//! Players and seating.
//!
//! ## PlayerId
//!
//! Seat index into the roster. Seating order is turn order.
//!
//! ## PlayerRoster
//!
//! The 2-4 seated players, backed by a `Vec` for O(1) access by
//! `PlayerId`. Each player owns a distinct [`Side`] of the board.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::position::{Column, Position, Row};

/// Fewest players a match can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match can seat (one per side).
pub const MAX_PLAYERS: usize = 4;

/// Player identifier: the 0-based seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// The side of the board a player sits at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Sides in the order they are offered at the table.
    pub const ALL: [Side; MAX_PLAYERS] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The three cards directly in front of this side, peeked at the start
    /// of every round.
    #[must_use]
    pub const fn front_positions(self) -> [Position; 3] {
        match self {
            Side::Top => [
                Position::new(Row::A, Column::Two),
                Position::new(Row::A, Column::Three),
                Position::new(Row::A, Column::Four),
            ],
            Side::Bottom => [
                Position::new(Row::E, Column::Two),
                Position::new(Row::E, Column::Three),
                Position::new(Row::E, Column::Four),
            ],
            Side::Left => [
                Position::new(Row::B, Column::One),
                Position::new(Row::C, Column::One),
                Position::new(Row::D, Column::One),
            ],
            Side::Right => [
                Position::new(Row::B, Column::Five),
                Position::new(Row::C, Column::Five),
                Position::new(Row::D, Column::Five),
            ],
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A seated player.
///
/// `active` is per round: reset to true at round start, cleared on a
/// mismatch or when no face-down card is left. `rubies` accumulates over
/// the whole match and never decreases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    side: Side,
    active: bool,
    rubies: u32,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, side: Side) -> Self {
        Self {
            id,
            name: name.into(),
            side,
            active: true,
            rubies: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[must_use]
    pub fn rubies(&self) -> u32 {
        self.rubies
    }

    /// Credit rubies won at the end of a round.
    pub fn add_rubies(&mut self, amount: u32) {
        self.rubies += amount;
    }
}

impl fmt::Display for Player {
    /// `Anne: top (active)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "inactive" };
        write!(f, "{}: {} ({status})", self.name, self.side)
    }
}

/// Ordered seating of 2-4 players.
///
/// ## Example
///
/// ```
/// use memoarrr::core::{PlayerId, PlayerRoster, Side};
///
/// let roster = PlayerRoster::new(vec![
///     ("Anne".to_string(), Side::Top),
///     ("Bonny".to_string(), Side::Bottom),
/// ])
/// .unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[PlayerId::new(1)].name(), "Bonny");
/// assert_eq!(roster.active_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoster {
    players: Vec<Player>,
}

impl PlayerRoster {
    /// Seat players in the given order.
    ///
    /// Fails with `InvalidRoster` unless there are 2-4 players on
    /// distinct sides.
    pub fn new(seats: Vec<(String, Side)>) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats.len()) {
            return Err(GameError::InvalidRoster(format!(
                "expected {MIN_PLAYERS}-{MAX_PLAYERS} players, got {}",
                seats.len()
            )));
        }

        let mut players: Vec<Player> = Vec::with_capacity(seats.len());
        for (index, (name, side)) in seats.into_iter().enumerate() {
            if let Some(taken) = players.iter().find(|p| p.side == side) {
                return Err(GameError::InvalidRoster(format!(
                    "side {side} is already taken by {}",
                    taken.name
                )));
            }
            players.push(Player::new(PlayerId::new(index as u8), name, side));
        }

        Ok(Self { players })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Mark every player active (round start).
    pub fn activate_all(&mut self) {
        for player in &mut self.players {
            player.set_active(true);
        }
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// First active player in seating order.
    #[must_use]
    pub fn first_active(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.is_active()).map(Player::id)
    }
}

impl Index<PlayerId> for PlayerRoster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<PlayerId> for PlayerRoster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        self.get_mut(id)
    }
}
