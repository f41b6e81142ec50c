//! Rule predicates: match validity, round end, match end, turn order.
//!
//! The turn engine calls into `Rules` but the rules never touch the board
//! or the roster themselves.

mod predicates;

pub use predicates::{Rules, ROUND_LIMIT};
