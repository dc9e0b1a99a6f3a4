//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the ports the
//! orchestration drives, not invalid data. Data errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by the host and the project store.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A host-side write or read failed.
    #[error("Failed to {operation} {}: {reason}", path.display())]
    HostIo {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// The save dialog could not be shown or answered.
    #[error("Save dialog failed: {reason}")]
    DialogFailed { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Project store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::HostIo { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::DialogFailed { .. } => vec![
                "Pass the destination explicitly with --path".into(),
            ],
            Self::StoreLockError => vec![
                "The project store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HostIo { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::DialogFailed { .. } => ErrorCategory::Validation,
        }
    }
}
