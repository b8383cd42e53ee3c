use thiserror::Error;

use pchtxt_sort_lib::SortError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Fetch or organize failure
    #[error("{0}")]
    Sort(#[from] SortError),

    /// Unknown source name
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn unknown_source(msg: impl Into<String>) -> Self {
        Self::UnknownSource(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
