//! Matcher runtime errors.
//!
//! Unlike a failed match (an ordinary `None` result, never an error), these
//! mean the engine gave up before it could determine an answer.

/// A match attempt that could not run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The step budget (see [`crate::matcher::try_match`]) was exhausted
    /// before the attempt could resolve to a match or a definitive failure.
    #[error("step budget exhausted during match")]
    StepBudgetExhausted,
}
