//! Usage errors: wrong flags, missing arguments, unreadable paths.
//!
//! These are distinct from [`tinygrep_parser::ParseError`], which gets its
//! own rendering in [`crate::diagnostics`]. A `CliError` is always printed as
//! a plain `error: ...` line and always exits with status 2.

/// Something wrong with how `tinygrep` was invoked, independent of the
/// pattern or the engine.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("--recursive requires exactly one path, a directory to walk")]
    RecursiveRequiresSingleDirectory,

    #[error("'{path}' is not a directory")]
    NotADirectory { path: String },

    #[error("'{path}' is a directory; pass --recursive to search directories")]
    IsADirectory { path: String },

    #[error("could not read '{path}': {source}")]
    UnreadablePath {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read standard input: {source}")]
    UnreadableStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("internal error: {source}")]
    Engine {
        #[source]
        source: tinygrep_engine::EngineError,
    },
}
