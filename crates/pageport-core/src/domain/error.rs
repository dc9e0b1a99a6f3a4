// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside outcome values)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Identifier for {kind} cannot be empty")]
    EmptyIdentifier { kind: &'static str },

    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project record: {0}")]
    InvalidProject(String),

    // ========================================================================
    // Wire Errors
    // ========================================================================
    #[error("Malformed message: {0}")]
    MalformedMessage(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyIdentifier { kind } => vec![
                format!("Provide a non-empty {} identifier", kind),
            ],
            Self::EmptyProjectName => vec![
                "Give the project a name before exporting".into(),
                "The name is used for the default file name: <name>.html".into(),
            ],
            Self::InvalidProject(msg) => vec![
                "Check the project file is valid JSON".into(),
                format!("Details: {}", msg),
            ],
            Self::MalformedMessage(_) => vec![
                "Messages are JSON objects tagged with a \"type\" field".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyIdentifier { .. }
            | Self::EmptyProjectName
            | Self::InvalidProject(_)
            | Self::MalformedMessage(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
