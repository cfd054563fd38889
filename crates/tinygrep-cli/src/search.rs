//! The line-scanning front end: turns a compiled pattern and a [`Source`]
//! of lines into printed matches and an overall "did anything match"
//! result. Deliberately thin — matching itself is entirely
//! `tinygrep_engine::search_line`; this module only does I/O and formatting.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tinygrep_core::MatchNode;
use tinygrep_engine::{self, MatchOutcome, DEFAULT_STEP_BUDGET};
use walkdir::WalkDir;

use crate::error::CliError;

/// Where lines come from, one variant per CLI surface.
pub enum Source {
    /// `prog -E <pattern>`: a single line read from standard input.
    Stdin,
    /// `prog -E <pattern> <file>...`
    Files(Vec<PathBuf>),
    /// `prog -r -E <pattern> <dir>`
    Recursive(PathBuf),
}

impl Source {
    /// Classify `paths` (and the `--recursive` flag) into a [`Source`],
    /// validating the directory/file distinction up front so the rest of
    /// the front end never has to special-case a bad path mid-search.
    pub fn classify(paths: Vec<PathBuf>, recursive: bool) -> Result<Self, CliError> {
        if recursive {
            let mut iter = paths.into_iter();
            let dir = iter.next().ok_or(CliError::RecursiveRequiresSingleDirectory)?;
            if iter.next().is_some() {
                return Err(CliError::RecursiveRequiresSingleDirectory);
            }
            if !dir.is_dir() {
                return Err(CliError::NotADirectory {
                    path: dir.display().to_string(),
                });
            }
            return Ok(Source::Recursive(dir));
        }

        if paths.is_empty() {
            return Ok(Source::Stdin);
        }

        for path in &paths {
            if path.is_dir() {
                return Err(CliError::IsADirectory {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(Source::Files(paths))
    }
}

/// Run the search described by `source` against `root`, writing matches (or
/// debug lines) to `out`. Returns whether any line anywhere matched.
pub fn run(
    root: &MatchNode,
    source: Source,
    debug: bool,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    match source {
        Source::Stdin => search_stdin(root, debug, out),
        Source::Files(paths) => {
            let prefix = paths.len() > 1;
            let mut any_match = false;
            for path in paths {
                if search_file(root, &path, prefix, debug, out)? {
                    any_match = true;
                }
            }
            Ok(any_match)
        }
        Source::Recursive(dir) => search_directory(root, &dir, debug, out),
    }
}

fn search_stdin(root: &MatchNode, debug: bool, out: &mut impl Write) -> Result<bool, CliError> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|source| CliError::UnreadableStdin { source })?;
    let line = line.trim_end_matches(['\n', '\r']);

    let outcome = match_line(root, line)?;
    if debug {
        write_debug_line(out, "<stdin>", 1, line, outcome.as_ref());
    }
    Ok(outcome.is_some())
}

fn search_file(
    root: &MatchNode,
    path: &std::path::Path,
    prefix: bool,
    debug: bool,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let label = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| CliError::UnreadablePath {
        path: label.clone(),
        source,
    })?;

    let mut any_match = false;
    for (lineno, line) in contents.lines().enumerate() {
        let outcome = match_line(root, line)?;
        if debug {
            write_debug_line(out, &label, lineno + 1, line, outcome.as_ref());
        } else if outcome.is_some() {
            if prefix {
                let _ = writeln!(out, "{label}:{line}");
            } else {
                let _ = writeln!(out, "{line}");
            }
        }
        any_match |= outcome.is_some();
    }
    Ok(any_match)
}

fn search_directory(
    root: &MatchNode,
    dir: &std::path::Path,
    debug: bool,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let mut any_match = false;
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        // Recursive mode always prefixes with the path, even for a lone
        // matching file, so `prefix` is unconditionally true here.
        if search_file(root, entry.path(), true, debug, out)? {
            any_match = true;
        }
    }
    Ok(any_match)
}

fn match_line(root: &MatchNode, line: &str) -> Result<Option<MatchOutcome>, CliError> {
    tinygrep_engine::search_line(root, line, Some(DEFAULT_STEP_BUDGET))
        .map_err(|source| CliError::Engine { source })
}

/// `--debug` format: one line per input line, unstable on purpose. Not
/// meant to be parsed by scripts.
fn write_debug_line(
    out: &mut impl Write,
    label: &str,
    lineno: usize,
    line: &str,
    outcome: Option<&MatchOutcome>,
) {
    match outcome {
        None => {
            let _ = writeln!(out, "{label}:{lineno}: no match");
        }
        Some(outcome) => {
            let captures: Vec<String> = outcome
                .captures
                .iter()
                .map(|c| match c {
                    Some(span) => format!("{:?}", span.slice(line)),
                    None => "<unset>".to_string(),
                })
                .collect();
            if captures.is_empty() {
                let _ = writeln!(out, "{label}:{lineno}: match");
            } else {
                let _ = writeln!(out, "{label}:{lineno}: match captures={captures:?}");
            }
        }
    }
}

#[cfg(test)]
mod search_tests {
    use super::*;

    fn root(pattern: &str) -> MatchNode {
        tinygrep_parser::parse(pattern).unwrap()
    }

    #[test]
    fn classify_defaults_to_stdin_with_no_paths() {
        assert!(matches!(
            Source::classify(vec![], false).unwrap(),
            Source::Stdin
        ));
    }

    #[test]
    fn classify_rejects_directory_without_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let err = Source::classify(vec![dir.path().to_path_buf()], false).unwrap_err();
        assert!(matches!(err, CliError::IsADirectory { .. }));
    }

    #[test]
    fn classify_rejects_recursive_with_multiple_paths() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            Source::classify(vec![dir.path().to_path_buf(), dir.path().to_path_buf()], true)
                .unwrap_err();
        assert!(matches!(err, CliError::RecursiveRequiresSingleDirectory));
    }

    #[test]
    fn classify_rejects_recursive_over_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a.txt");
        fs::write(&file_path, "hello\n").unwrap();
        let err = Source::classify(vec![file_path], true).unwrap_err();
        assert!(matches!(err, CliError::NotADirectory { .. }));
    }

    #[test]
    fn single_file_has_no_filename_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a.txt");
        fs::write(&file_path, "the cat sat\nno match here\n").unwrap();

        let pattern = root("cat");
        let mut out = Vec::new();
        let matched = run(&pattern, Source::Files(vec![file_path]), false, &mut out).unwrap();
        assert!(matched);
        assert_eq!(String::from_utf8(out).unwrap(), "the cat sat\n");
    }

    #[test]
    fn multiple_files_get_filename_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "dogs bark\n").unwrap();
        fs::write(&b, "no animals\n").unwrap();

        let pattern = root("dogs");
        let mut out = Vec::new();
        let matched = run(&pattern, Source::Files(vec![a.clone(), b]), false, &mut out).unwrap();
        assert!(matched);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.starts_with(&format!("{}:", a.display())));
    }

    #[test]
    fn recursive_walk_finds_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("top.txt"), "nothing relevant\n").unwrap();
        fs::write(nested.join("deep.txt"), "a match here\n").unwrap();

        let pattern = root("match");
        let mut out = Vec::new();
        let matched = run(
            &pattern,
            Source::Recursive(dir.path().to_path_buf()),
            false,
            &mut out,
        )
        .unwrap();
        assert!(matched);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("deep.txt:a match here"));
    }

    #[test]
    fn debug_mode_reports_every_line_and_captures() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a.txt");
        fs::write(&file_path, "dogs bark\ncats too\n").unwrap();

        let pattern = root("(cat|dog)s");
        let mut out = Vec::new();
        run(&pattern, Source::Files(vec![file_path]), true, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        let mut lines = rendered.lines();
        assert!(lines.next().unwrap().contains("match captures"));
        assert!(lines.next().unwrap().contains("match captures"));
    }

    #[test]
    fn debug_mode_reports_no_match_lines_too() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a.txt");
        fs::write(&file_path, "nothing relevant\n").unwrap();

        let pattern = root("dogs");
        let mut out = Vec::new();
        run(&pattern, Source::Files(vec![file_path]), true, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.trim_end().ends_with("no match"));
    }
}
