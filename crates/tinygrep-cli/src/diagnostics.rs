//! Renders a [`ParseError`] as a one-shot diagnostic, underlining the
//! offending span against the pattern text with `annotate-snippets`.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use tinygrep_parser::ParseError;

/// Render `err` against `pattern`, colorized if `colored` is true.
///
/// The pattern dialect is ASCII-only in practice, but [`ParseError::span`]
/// is expressed in `char` offsets (see `tinygrep_parser`'s internal `Vec<char>`
/// indexing), which coincide with byte offsets only for ASCII text; patterns
/// containing non-ASCII characters may render a slightly misplaced
/// underline. This is a cosmetic limitation of the diagnostic, not of
/// matching itself.
pub fn render_parse_error(err: &ParseError, pattern: &str, colored: bool) -> String {
    let span = err.span();
    let len = pattern.chars().count();
    let start = span.start.min(len);
    let end = span.end.max(start + 1);
    let range = char_offset_to_byte_range(pattern, start, end);

    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let message = err.to_string();
    let snippet = Snippet::source(pattern)
        .line_start(1)
        .path("<pattern>")
        .annotation(AnnotationKind::Primary.span(range).label(&message));

    let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report)
}

/// Translate a `[start, end)` range expressed in `char` indices into the
/// byte range `annotate_snippets::Snippet` expects.
fn char_offset_to_byte_range(text: &str, start: usize, end: usize) -> std::ops::Range<usize> {
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());
    let byte_start = offsets.get(start).copied().unwrap_or(text.len());
    let byte_end = offsets.get(end).copied().unwrap_or(text.len());
    byte_start..byte_end.max(byte_start)
}
