//! Command-line surface, parsed with `clap`'s derive API.

use std::path::PathBuf;

use clap::Parser;

/// A small grep-like line-scanning front end over the tinygrep regular-expression engine.
#[derive(Parser, Debug)]
#[command(name = "tinygrep", bin_name = "tinygrep")]
#[command(about = "Search lines of input for a tinygrep pattern")]
pub struct Cli {
    /// The pattern to match, in the tinygrep dialect (see the crate's pattern
    /// table). Always required, mirroring `grep -E`'s mandatory operand.
    #[arg(short = 'E', long = "regexp", value_name = "PATTERN")]
    pub pattern: String,

    /// Files to search, or (with `--recursive`) a single directory to walk.
    /// With no paths at all, a single line is read from standard input.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Walk `PATH` recursively, treating every regular file under it as a
    /// source of lines. Requires exactly one path, and that path must be a
    /// directory.
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Instead of printing matching lines, print one line per input line
    /// showing whether it matched and, for the first match, its captures.
    /// Format is not stable; meant for interactive inspection only.
    #[arg(long = "debug")]
    pub debug: bool,
}
