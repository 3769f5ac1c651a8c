use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// `Result` alias which automatically uses `ShellError` as the error type.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Every failure the shell can run into.
/// Fatal errors stop the main loop, everything else is reported and the loop keeps going.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to allocate space for the {0}")]
    OutOfMemory(&'static str, #[source] TryReserveError),
    #[error("failed to read input: {0}")]
    ReadInput(#[source] io::Error),
    #[error("line editor failed: {0}")]
    LineEditor(#[from] ReadlineError),
    #[error("expected {expected} after \"{command}\"")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("cd: {}: {source}", .path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}: command not found")]
    CommandNotFound(String),
    #[error("{command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command}: failed to wait for the child process: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl ShellError {
    /// Whether the shell can make any further progress after this error
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::OutOfMemory(..) | Self::ReadInput(_) | Self::LineEditor(_)
        )
    }
}
