//! Outcome types for the virtual filesystem boundary.
//!
//! Reading from an engine-produced filesystem can fail in ways the caller
//! wants to branch on rather than propagate. [`FsOutcome`] carries either the
//! payload or the [`VfsError`] that prevented producing it; [`ErrorReport`]
//! is the flattened `{message, stack}` form an error takes on the wire.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a virtual filesystem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("no such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{operation} failed for {}: {reason}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },
}

/// Two-variant outcome of a filesystem read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOutcome<T> {
    Success(T),
    Error(VfsError),
}

impl<T> FsOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn into_result(self) -> Result<T, VfsError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, VfsError>> for FsOutcome<T> {
    fn from(result: Result<T, VfsError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(error) => Self::Error(error),
        }
    }
}

/// Serializable description of an error: its message and cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorReport {
    pub message: String,
    /// One `Caused by: ...` line per `source()` in the chain; empty when the
    /// error has no cause.
    pub stack: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Capture `err`'s display message and walk its source chain.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut lines = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            lines.push(format!("Caused by: {cause}"));
            source = cause.source();
        }

        Self {
            message: err.to_string(),
            stack: lines.join("\n"),
        }
    }
}
