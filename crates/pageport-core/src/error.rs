//! Unified error handling for Pageport Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, VfsError};

/// Root error type for Pageport Core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Errors from the domain layer (invalid data).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Errors from a virtual filesystem.
    #[error(transparent)]
    Vfs(#[from] VfsError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Vfs(_) => vec!["The export engine produced an unreadable result".into()],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Pageport".into(),
                "Please report this issue with the output of -vv".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Vfs(VfsError::NotFound { .. }) => ErrorCategory::NotFound,
            Self::Vfs(_) | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> CoreResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CoreResult<T> {
        self.map_err(|e| CoreError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorReport;

    #[test]
    fn missing_vfs_entry_is_not_found() {
        let err: CoreError = VfsError::NotFound { path: "/".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn host_failure_reports_underlying_message_once() {
        let err: CoreError = ApplicationError::HostIo {
            operation: "write",
            path: "/out/landing.html".into(),
            reason: "permission denied".into(),
        }
        .into();

        let report = ErrorReport::from_error(&err);
        assert_eq!(
            report.message,
            "Failed to write /out/landing.html: permission denied"
        );
        assert!(report.stack.is_empty());
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("reading project").unwrap_err();
        assert!(err.to_string().contains("reading project: boom"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
