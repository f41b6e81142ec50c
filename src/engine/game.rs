//! Match orchestration.
//!
//! A `Match` owns the table, the turn engine and the score ledger, and
//! plays rounds until the round limit is reached. Round settlement happens
//! here: the engine reports the surviving player, the ledger pays them.

use std::sync::Arc;

use crate::board::Board;
use crate::cards::CardPool;
use crate::collab::Collaborator;
use crate::core::{GameError, GameRng, MatchConfig, PlayerId, PlayerRoster, RngStream, RulesMode};
use crate::score::{MatchResult, Ruby, ScoreLedger};

use super::event::MatchEvent;
use super::table::Table;
use super::turn::TurnEngine;

/// One match from deal to final tally.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use memoarrr::cards::CardPool;
/// use memoarrr::core::{MatchConfig, Side};
/// use memoarrr::engine::Match;
///
/// let config = MatchConfig::new()
///     .with_seed(7)
///     .with_player("Anne", Side::Top)
///     .with_player("Bonny", Side::Bottom);
/// let roster = config.roster().unwrap();
///
/// let game = Match::setup(&config, roster, Arc::new(CardPool::standard())).unwrap();
/// assert_eq!(game.seed(), 7);
/// assert_eq!(game.table().board().occupied_count(), 24);
/// assert!(!game.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    table: Table,
    engine: TurnEngine,
    ledger: ScoreLedger,
    seed: u64,
}

impl Match {
    /// Shuffle the card supply, deal the board and prepare the ruby supply.
    ///
    /// Uses the configured seed, or a random one.
    pub fn setup(
        config: &MatchConfig,
        roster: PlayerRoster,
        pool: Arc<CardPool>,
    ) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = GameRng::new(seed);

        let mut cards = pool.supply();
        cards.shuffle(&mut rng.stream(RngStream::Cards));
        let board = Board::new(pool, &mut cards)?;
        let ledger = ScoreLedger::new(rng.stream(RngStream::Rubies));

        let mut game = Self::new(Table::new(board, roster), config.rules, ledger);
        game.seed = seed;
        Ok(game)
    }

    /// Assemble a match from prepared parts.
    #[must_use]
    pub fn new(table: Table, rules: RulesMode, ledger: ScoreLedger) -> Self {
        Self {
            table,
            engine: TurnEngine::new(rules),
            ledger,
            seed: 0,
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Seed the match was dealt from (0 when assembled by hand).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.table.is_game_over()
    }

    /// Play one round and settle it.
    ///
    /// Returns the round winner and the ruby they drew.
    pub fn play_round<C: Collaborator + ?Sized>(
        &mut self,
        collab: &mut C,
    ) -> Result<Option<(PlayerId, Option<Ruby>)>, GameError> {
        let winner = self.engine.play_round(&mut self.table, collab)?;

        let settled = match winner {
            Some(player) => {
                let ruby = self.ledger.award_rubies(&mut self.table.roster_mut()[player]);
                self.table.emit(collab, MatchEvent::RoundWon { player, ruby })?;
                Some((player, ruby))
            }
            None => {
                self.table.emit(collab, MatchEvent::NoRoundWinner)?;
                None
            }
        };

        self.table.finish_round();
        Ok(settled)
    }

    /// Play every remaining round and report the winners.
    pub fn play<C: Collaborator + ?Sized>(&mut self, collab: &mut C) -> Result<MatchResult, GameError> {
        while !self.is_over() {
            self.play_round(collab)?;
        }

        let winners = ScoreLedger::final_winners(self.table.roster().players());
        self.table.emit(
            collab,
            MatchEvent::MatchOver {
                winners: winners.clone(),
            },
        )?;
        Ok(MatchResult::from_winners(winners))
    }
}
