//! The match engine.
//!
//! - `Table`: board, players, round counter and event log
//! - `TurnEngine`: plays rounds turn by turn
//! - `Match`: deals the board and plays every round to the final tally
//! - `MatchEvent` / `EventLog`: typed history of everything that happened

mod event;
mod game;
mod table;
mod turn;

pub use event::{EventLog, EventRecord, MatchEvent};
pub use game::Match;
pub use table::Table;
pub use turn::{RoundState, TurnEngine, TurnOutcome};
