//! The atom recognizer.
//!
//! Given a pattern (as a char slice, since the dialect is ASCII-only and a
//! char slice lets the rest of the parser index by character rather than by
//! byte) and a position, recognizes one indivisible matchable unit and
//! reports how many characters it occupies. Contains no matching logic and
//! no knowledge of capture indices — those belong to the parser, which calls
//! back into this module once per atom.

use tinygrep_core::{BracketSet, Span};

use crate::error::ParseError;

/// One atom as seen by the parser, before quantifiers or capture indices are
/// attached. `Group` carries only the span of its *content* (between the
/// parens); the parser recurses to turn that into a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawAtom {
    Literal(char),
    AnyChar,
    DigitClass,
    WordClass,
    Bracket(BracketSet, bool),
    Backreference(u8),
    Group(Span),
}

/// Recognize the atom starting at `pos`. Returns the atom and its length in
/// characters. `pos` must be `< pattern.len()`.
pub(crate) fn recognize(pattern: &[char], pos: usize) -> Result<(RawAtom, usize), ParseError> {
    debug_assert!(pos < pattern.len());

    match pattern[pos] {
        '\\' => recognize_escape(pattern, pos),
        '[' => recognize_bracket(pattern, pos),
        '(' => recognize_group(pattern, pos),
        '.' => Ok((RawAtom::AnyChar, 1)),
        c => Ok((RawAtom::Literal(c), 1)),
    }
}

fn recognize_escape(pattern: &[char], pos: usize) -> Result<(RawAtom, usize), ParseError> {
    let Some(&next) = pattern.get(pos + 1) else {
        return Err(ParseError::DanglingEscape {
            span: Span::at(pos),
        });
    };
    let atom = match next {
        'd' => RawAtom::DigitClass,
        'w' => RawAtom::WordClass,
        '1'..='9' => RawAtom::Backreference(next as u8 - b'0'),
        other => RawAtom::Literal(other),
    };
    Ok((atom, 2))
}

fn recognize_bracket(pattern: &[char], pos: usize) -> Result<(RawAtom, usize), ParseError> {
    let content_start = pos + 1;
    let Some(close) = find_bracket_close(pattern, content_start) else {
        return Err(ParseError::UnbalancedBracket {
            span: Span::at(pos),
        });
    };
    let mut content = &pattern[content_start..close];
    let negated = content.first() == Some(&'^');
    if negated {
        content = &content[1..];
    }
    if content.is_empty() {
        return Err(ParseError::EmptyBracket {
            span: Span::new(pos, close + 1),
        });
    }
    let set = BracketSet::new(content.to_vec());
    Ok((RawAtom::Bracket(set, negated), close + 1 - pos))
}

/// Scan forward from `start` (just past the opening `[`) for the first
/// unescaped `]`. A `\x` pair is skipped as a unit so an escaped `]` doesn't
/// terminate the class early; per the dialect, the backslash itself still
/// ends up as a literal member of the resulting set (this dialect has no
/// escapes inside brackets beyond taking characters literally).
pub(crate) fn find_bracket_close(pattern: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    while i < pattern.len() {
        match pattern[i] {
            '\\' if i + 1 < pattern.len() => i += 2,
            ']' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn recognize_group(pattern: &[char], pos: usize) -> Result<(RawAtom, usize), ParseError> {
    let content_start = pos + 1;
    let Some(close) = find_paren_close(pattern, content_start) else {
        return Err(ParseError::UnbalancedParen {
            span: Span::at(pos),
        });
    };
    Ok((
        RawAtom::Group(Span::new(content_start, close)),
        close + 1 - pos,
    ))
}

/// Scan forward from `start` (just past the opening `(`) for the matching
/// `)`, honoring nested parens, escaped characters, and bracket contexts
/// (`[...]` suppresses paren counting, since `[(]` is a class containing the
/// literal character `(`, not the start of a group).
fn find_paren_close(pattern: &[char], start: usize) -> Option<usize> {
    let mut depth = 1u32;
    let mut i = start;
    while i < pattern.len() {
        match pattern[i] {
            '\\' if i + 1 < pattern.len() => i += 2,
            '[' => match find_bracket_close(pattern, i + 1) {
                Some(close) => i = close + 1,
                None => return None,
            },
            '(' => {
                depth += 1;
                i += 1;
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

#[cfg(test)]
mod atom_tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn recognizes_literal() {
        let p = chars("a");
        assert_eq!(recognize(&p, 0).unwrap(), (RawAtom::Literal('a'), 1));
    }

    #[test]
    fn recognizes_any_char() {
        let p = chars(".");
        assert_eq!(recognize(&p, 0).unwrap(), (RawAtom::AnyChar, 1));
    }

    #[test]
    fn recognizes_digit_and_word_class() {
        let p = chars(r"\d\w");
        assert_eq!(recognize(&p, 0).unwrap(), (RawAtom::DigitClass, 2));
        assert_eq!(recognize(&p, 2).unwrap(), (RawAtom::WordClass, 2));
    }

    #[test]
    fn recognizes_backreference() {
        let p = chars(r"\1");
        assert_eq!(recognize(&p, 0).unwrap(), (RawAtom::Backreference(1), 2));
    }

    #[test]
    fn escape_of_metacharacter_is_literal() {
        let p = chars(r"\+");
        assert_eq!(recognize(&p, 0).unwrap(), (RawAtom::Literal('+'), 2));
    }

    #[test]
    fn dangling_escape_is_an_error() {
        let p = chars(r"\");
        assert_eq!(
            recognize(&p, 0).unwrap_err(),
            ParseError::DanglingEscape {
                span: Span::at(0)
            }
        );
    }

    #[test]
    fn recognizes_bracket_and_negated_bracket() {
        let p = chars("[abc]");
        let (atom, len) = recognize(&p, 0).unwrap();
        assert_eq!(len, 5);
        assert_eq!(
            atom,
            RawAtom::Bracket(BracketSet::new(vec!['a', 'b', 'c']), false)
        );

        let p = chars("[^abc]");
        let (atom, len) = recognize(&p, 0).unwrap();
        assert_eq!(len, 6);
        assert_eq!(
            atom,
            RawAtom::Bracket(BracketSet::new(vec!['a', 'b', 'c']), true)
        );
    }

    #[test]
    fn empty_bracket_is_an_error() {
        let p = chars("[]");
        assert!(matches!(
            recognize(&p, 0).unwrap_err(),
            ParseError::EmptyBracket { .. }
        ));
    }

    #[test]
    fn unbalanced_bracket_is_an_error() {
        let p = chars("[abc");
        assert!(matches!(
            recognize(&p, 0).unwrap_err(),
            ParseError::UnbalancedBracket { .. }
        ));
    }

    #[test]
    fn recognizes_group_span() {
        let p = chars("(cat)");
        let (atom, len) = recognize(&p, 0).unwrap();
        assert_eq!(len, 5);
        assert_eq!(atom, RawAtom::Group(Span::new(1, 4)));
    }

    #[test]
    fn group_scan_honors_nested_parens_and_brackets() {
        let p = chars("((a)[)])"); // inner group, then a bracket containing a literal ')'
        let (atom, len) = recognize(&p, 0).unwrap();
        assert_eq!(len, 8);
        assert_eq!(atom, RawAtom::Group(Span::new(1, 7)));
    }

    #[test]
    fn unbalanced_paren_is_an_error() {
        let p = chars("(cat");
        assert!(matches!(
            recognize(&p, 0).unwrap_err(),
            ParseError::UnbalancedParen { .. }
        ));
    }
}
