//! Core data structures shared by the tinygrep parser and engine.
//!
//! Two layers:
//! - [`span`]: byte ranges into a pattern or input string.
//! - [`node`]: the tree of [`node::MatchNode`] the parser builds and the engine walks.

pub mod node;
pub mod span;

pub use node::{BracketSet, MatchNode};
pub use span::Span;
