//! Domain value objects: identifiers, host type, export location.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity of their
//! own. Identifiers are string newtypes so a project id can never be passed
//! where an app id is expected.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ── Identifiers ──────────────────────────────────────────────────────────────

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, rejecting empty strings.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::EmptyIdentifier { kind: $kind });
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Identifies an application window/surface connected to the bus.
    AppId,
    "app"
);

string_id!(
    /// Identifies a project in the data store.
    ProjectId,
    "project"
);

string_id!(
    /// Correlates a request with its response or failure notification.
    TransactionId,
    "transaction"
);

impl TransactionId {
    /// A fresh random transaction id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Unique id of a single outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(uuid::Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ── HostType ─────────────────────────────────────────────────────────────────

/// The kind of host the exporter runs inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostType {
    /// Interactive desktop shell with native dialogs.
    Desktop,
    /// Non-interactive host (server, CLI pipeline, browser bridge).
    Headless,
}

impl HostType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Headless => "headless",
        }
    }

    /// Whether an export must be abandoned when no target path was obtained.
    pub const fn requires_target_path(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" | "electron" => Ok(Self::Desktop),
            "headless" | "server" => Ok(Self::Headless),
            other => Err(DomainError::MalformedMessage(format!(
                "unknown host type: {other}"
            ))),
        }
    }
}

// ── ExportLocation ───────────────────────────────────────────────────────────

/// Root directory of the export templates and static assets.
///
/// Injected into the export service at construction; the engine resolves its
/// templates relative to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportLocation(PathBuf);

impl ExportLocation {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, segment: impl AsRef<Path>) -> PathBuf {
        self.0.join(segment)
    }
}

impl fmt::Display for ExportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifiers_are_rejected() {
        assert_eq!(
            AppId::new("  "),
            Err(DomainError::EmptyIdentifier { kind: "app" })
        );
        assert!(ProjectId::new("p-1").is_ok());
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let id = ProjectId::new("p-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
    }

    #[test]
    fn host_type_parses_aliases() {
        assert_eq!(HostType::from_str("Electron").unwrap(), HostType::Desktop);
        assert_eq!(HostType::from_str("server").unwrap(), HostType::Headless);
        assert!(HostType::from_str("toaster").is_err());
    }

    #[test]
    fn only_desktop_requires_a_target_path() {
        assert!(HostType::Desktop.requires_target_path());
        assert!(!HostType::Headless.requires_target_path());
    }

    #[test]
    fn generated_transactions_are_unique() {
        assert_ne!(TransactionId::generate(), TransactionId::generate());
    }
}
