//! Messages exchanged over the application bus.
//!
//! The wire format is JSON, internally tagged by `"type"` with camelCase
//! field names:
//!
//! ```json
//! {"type":"ExportHtmlProject","appId":"main","transaction":"t-1",
//!  "payload":{"projectId":"p-1","path":"/tmp/site.html"}}
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    outcome::ErrorReport,
    value_objects::{AppId, MessageId, ProjectId, TransactionId},
};

/// Every message the export flow consumes or produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    ExportHtmlProject(ExportHtmlProject),
    ShowError(ShowError),
}

impl Message {
    pub fn from_json(line: &str) -> Result<Self, DomainError> {
        serde_json::from_str(line).map_err(|e| DomainError::MalformedMessage(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::MalformedMessage(e.to_string()))
    }

    pub fn transaction(&self) -> &TransactionId {
        match self {
            Self::ExportHtmlProject(m) => &m.transaction,
            Self::ShowError(m) => &m.transaction,
        }
    }
}

// ── Inbound ──────────────────────────────────────────────────────────────────

/// Request to export one project as a standalone HTML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportHtmlProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<AppId>,
    pub transaction: TransactionId,
    pub payload: ExportHtmlProjectPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportHtmlProjectPayload {
    pub project_id: ProjectId,
    /// Explicit destination; when absent the host is asked for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl ExportHtmlProject {
    pub fn new(app_id: AppId, project_id: ProjectId) -> Self {
        Self {
            app_id: Some(app_id),
            transaction: TransactionId::generate(),
            payload: ExportHtmlProjectPayload {
                project_id,
                path: None,
            },
        }
    }

    pub fn with_transaction(mut self, transaction: TransactionId) -> Self {
        self.transaction = transaction;
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.payload.path = Some(path.into());
        self
    }
}

impl fmt::Display for ExportHtmlProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExportHtmlProject(transaction={}, app={}, project={}",
            self.transaction,
            self.app_id.as_ref().map_or("<none>", AppId::as_str),
            self.payload.project_id,
        )?;
        if let Some(path) = &self.payload.path {
            write!(f, ", path={}", path.display())?;
        }
        f.write_str(")")
    }
}

// ── Outbound ─────────────────────────────────────────────────────────────────

/// User-visible failure, correlated with the request by `transaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowError {
    pub transaction: TransactionId,
    pub id: MessageId,
    pub payload: FailureNotification,
}

impl ShowError {
    pub fn new(transaction: TransactionId, payload: FailureNotification) -> Self {
        Self {
            transaction,
            id: MessageId::new(),
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureNotification {
    pub message: String,
    pub detail: String,
    pub error: ErrorReport,
}

impl FailureNotification {
    /// The notification shown for any failed HTML export of `project_name`.
    pub fn html_export_failed(project_name: &str, error: ErrorReport) -> Self {
        Self {
            message: format!("HTML Export for {project_name} failed."),
            detail: format!("It threw the following error: {}", error.message),
            error,
        }
    }
}
