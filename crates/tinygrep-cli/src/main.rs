//! `tinygrep`: the CLI front end over the tinygrep regular-expression
//! engine. Thin by design — parsing the pattern and matching lines both
//! live in the `tinygrep-parser`/`tinygrep-engine` crates; this binary is
//! only argument handling, I/O, and error presentation.

mod cli;
mod diagnostics;
mod error;
mod search;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::CliError;
use search::Source;

/// Exit codes: 0 = match found, 1 = ran fine but no match, 2 = usage error
/// or pattern error.
const EXIT_MATCH: u8 = 0;
const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let root = match tinygrep_parser::parse(&cli.pattern) {
        Ok(root) => root,
        Err(err) => {
            let colored = io::stderr().is_terminal();
            eprint!(
                "{}",
                diagnostics::render_parse_error(&err, &cli.pattern, colored)
            );
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let source = match Source::classify(cli.paths, cli.recursive) {
        Ok(source) => source,
        Err(err) => return report_cli_error(&err),
    };

    let mut stdout = io::stdout().lock();
    match search::run(&root, source, cli.debug, &mut stdout) {
        Ok(true) => ExitCode::from(EXIT_MATCH),
        Ok(false) => ExitCode::from(EXIT_NO_MATCH),
        Err(err) => report_cli_error(&err),
    }
}

fn report_cli_error(err: &CliError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(EXIT_ERROR)
}
