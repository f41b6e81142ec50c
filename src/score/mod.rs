//! Rubies and the final tally.

mod ledger;
mod result;

pub use ledger::{Ruby, RubyCount, ScoreLedger, RUBY_DISTRIBUTION};
pub use result::MatchResult;
