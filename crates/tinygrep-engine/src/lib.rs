//! Recursive backtracking matcher and driver for the tinygrep pattern dialect.
//!
//! [`search_line`] is the public entry point: given a compiled pattern and a
//! line of text, it applies the retry-at-each-position policy and returns
//! the first match, if any, with its captures.

mod driver;
mod error;
mod matcher;

pub use driver::search_line;
pub use error::EngineError;
pub use matcher::{MatchOutcome, DEFAULT_STEP_BUDGET};
