//! Fatal parse errors.
//!
//! Every variant carries the [`Span`] of the offending construct in the
//! pattern text, so the front end can render it against the original source
//! (see `tinygrep-cli`'s diagnostic printer) instead of just printing a bare
//! message.

use tinygrep_core::Span;

/// A pattern that could not be compiled into a [`tinygrep_core::MatchNode`] tree.
///
/// These are always fatal: unlike a failed match, a `ParseError` means the
/// pattern itself is malformed and no attempt was made against any input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unbalanced '(': no matching ')'")]
    UnbalancedParen { span: Span },

    #[error("unbalanced '[': no matching ']'")]
    UnbalancedBracket { span: Span },

    #[error("empty character class '[]'")]
    EmptyBracket { span: Span },

    #[error("dangling '\\' at end of pattern")]
    DanglingEscape { span: Span },

    #[error("quantifier '{quantifier}' has nothing to repeat")]
    DanglingQuantifier { span: Span, quantifier: char },

    #[error("'$' is only valid as the last character of the pattern")]
    MisplacedEndAnchor { span: Span },

    #[error("'^' is only valid as the first character of the pattern")]
    MisplacedStartAnchor { span: Span },

    #[error("pattern nesting is too deep")]
    RecursionLimitExceeded { span: Span },

    #[error("backreference '\\{index}' refers to a group that hasn't opened yet")]
    UnknownBackreference { span: Span, index: u8 },
}

impl ParseError {
    /// The span every variant carries, for diagnostic rendering.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnbalancedParen { span }
            | ParseError::UnbalancedBracket { span }
            | ParseError::EmptyBracket { span }
            | ParseError::DanglingEscape { span }
            | ParseError::DanglingQuantifier { span, .. }
            | ParseError::MisplacedEndAnchor { span }
            | ParseError::MisplacedStartAnchor { span }
            | ParseError::RecursionLimitExceeded { span }
            | ParseError::UnknownBackreference { span, .. } => *span,
        }
    }
}
