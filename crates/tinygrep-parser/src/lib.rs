//! Recursive-descent parser for the tinygrep pattern dialect.
//!
//! [`parse`] is the only entry point: it turns a pattern string into a
//! [`tinygrep_core::MatchNode`] tree, or a [`ParseError`] pointing at the
//! offending span of the pattern text.

mod atom;
mod error;
mod parser;

pub use error::ParseError;
pub use parser::parse;
