//! The driver: wraps the matcher with the retry-at-each-position policy so
//! every embedder — the CLI, a future library consumer, a test harness —
//! shares one retry semantics instead of reimplementing it.

use tinygrep_core::MatchNode;

use crate::error::EngineError;
use crate::matcher::{self, MatchOutcome};

/// Search `line` for `root`, honoring start anchoring.
///
/// A start-anchored pattern (root is [`MatchNode::StartAnchor`]) is tried
/// only at position 0. Otherwise every starting position from `0` to
/// `line.len()` inclusive is tried, left to right, and the first match wins
/// — trying `line.len()` itself matters for patterns that can match the
/// empty string, like `a?$`.
pub fn search_line(
    root: &MatchNode,
    line: &str,
    step_budget: Option<u32>,
) -> Result<Option<MatchOutcome>, EngineError> {
    let input: Vec<char> = line.chars().collect();

    if matches!(root, MatchNode::StartAnchor(_)) {
        return matcher::try_match(root, &input, 0, step_budget);
    }

    for start in 0..=input.len() {
        if let Some(outcome) = matcher::try_match(root, &input, start, step_budget)? {
            return Ok(Some(outcome));
        }
    }
    Ok(None)
}
