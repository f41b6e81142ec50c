//! Match configuration.
//!
//! A `MatchConfig` fixes everything chosen before the first round:
//! - `RulesMode`: whether animal abilities fire on a match
//! - `DisplayMode`: full grid or condensed row of face-up cards
//! - the seated players and their sides
//! - an optional RNG seed for reproducible matches
//!
//! Configs are built in code with the builder methods or loaded from TOML:
//!
//! ```toml
//! rules = "expert"
//! display = "base"
//! seed = 7
//!
//! [[players]]
//! name = "Anne"
//! side = "top"
//!
//! [[players]]
//! name = "Bonny"
//! side = "bottom"
//! ```

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};
use super::player::{PlayerRoster, Side, MAX_PLAYERS, MIN_PLAYERS};

/// Which rule set resolves a successful match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesMode {
    /// Matches only keep the player in the round.
    #[default]
    Base,
    /// Matches also trigger the revealed animal's ability.
    Expert,
}

/// How the board is shown to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// The full 5x5 grid.
    #[default]
    Base,
    /// Only the face-up cards, in a single row labelled by position.
    Expert,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub side: Side,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }
}

/// Everything chosen before the first round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rules: RulesMode,
    pub display: DisplayMode,
    /// Seed for the card and ruby supplies. `None` picks one at random.
    pub seed: Option<u64>,
    /// Seated players in turn order. Empty means "ask at startup".
    pub players: Vec<PlayerConfig>,
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesMode) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn expert(self) -> Self {
        self.with_rules(RulesMode::Expert)
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seat another player after the existing ones.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, side: Side) -> Self {
        self.players.push(PlayerConfig::new(name, side));
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// An empty player list is valid: players are then seated interactively.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Ok(());
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
            return Err(ConfigError::Validation(format!(
                "players must list {MIN_PLAYERS}-{MAX_PLAYERS} entries, got {}",
                self.players.len()
            )));
        }

        let mut sides = FxHashSet::default();
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation("player names must not be empty".into()));
            }
            if !sides.insert(player.side) {
                return Err(ConfigError::Validation(format!(
                    "side {} is assigned to more than one player",
                    player.side
                )));
            }
        }

        Ok(())
    }

    /// Seat the configured players.
    pub fn roster(&self) -> Result<PlayerRoster, GameError> {
        PlayerRoster::new(
            self.players
                .iter()
                .map(|p| (p.name.clone(), p.side))
                .collect(),
        )
    }
}
