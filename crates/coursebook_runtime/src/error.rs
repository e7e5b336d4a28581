//! Errors raised by the runtime layer.
//!
//! Domain failures from the catalog pass through unchanged as
//! [`CommandError::Domain`]; everything else here concerns parsing input,
//! the terminal, or script files.

use std::fmt;
use std::io;
use std::path::PathBuf;

use coursebook_foundation::ParseIdError;
use thiserror::Error;

/// Errors produced while parsing or executing commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The catalog rejected the operation.
    #[error(transparent)]
    Domain(#[from] coursebook_foundation::Error),

    /// The first word of the line is not a command.
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    /// A command was given the wrong arguments.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// An id argument could not be parsed.
    #[error(transparent)]
    BadId(#[from] ParseIdError),

    /// A tab name was not recognised.
    #[error("unknown tab: {0} (expected types, courses, offerings, or registrations)")]
    UnknownTab(String),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A line of a script failed.
    #[error("{}:{}: {}", .path.display(), .line, .source)]
    Script {
        /// The script being evaluated.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The underlying failure.
        source: Box<CommandError>,
    },

    /// A script file could not be read.
    #[error("cannot read {}: {}", .path.display(), .source)]
    ReadScript {
        /// The script path.
        path: PathBuf,
        /// The I/O failure.
        source: io::Error,
    },

    /// Writing output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// Formatting a view failed.
    #[error("render error")]
    Render(#[from] fmt::Error),

    /// The line editor failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// JSON export failed.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// The global tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl CommandError {
    /// Returns the domain error, if this wraps one.
    #[must_use]
    pub fn as_domain(&self) -> Option<&coursebook_foundation::Error> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Script { source, .. } => source.as_domain(),
            _ => None,
        }
    }
}

/// Result type alias using [`CommandError`].
pub type Result<T> = std::result::Result<T, CommandError>;
