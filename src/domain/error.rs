use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Library-wide error type for seed-issues operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure (console writes, stdin reads).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file is not valid TOML for the catalog schema.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Catalog content violates one or more invariants.
    #[error("Invalid catalog:\n  - {}", .0.join("\n  - "))]
    InvalidCatalog(Vec<String>),

    /// Interactive confirmation failed.
    #[error("Failed to read confirmation: {0}")]
    Prompt(String),
}

/// Failure to obtain an exit status from an external tool invocation.
///
/// A non-zero exit is not an `InvocationError`; it is reported through
/// [`ToolOutput`](crate::ports::ToolOutput) so callers can classify it.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The process did not exit within its budget and was killed.
    #[error("timed out after {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// The process could not be started.
    #[error("failed to execute: {0}")]
    Spawn(#[source] io::Error),

    /// Waiting on the process failed.
    #[error("failed to wait for process: {0}")]
    Wait(#[source] io::Error),
}

impl InvocationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, InvocationError::Timeout { .. })
    }
}
