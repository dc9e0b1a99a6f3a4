//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the export service needs from external systems.
//! The `pageport-adapters` crate provides implementations.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AppId, ExportLocation, HostType, Message, Project, ProjectId, VfsError};
use crate::error::CoreResult;

/// Port for the application host (desktop shell, server, CLI).
///
/// Implemented by:
/// - `pageport_adapters::host::LocalHost`
#[async_trait]
pub trait Host: Send + Sync {
    /// Whether this host is interactive and insists on a target path.
    fn host_type(&self) -> HostType;

    /// Look up a connected application surface.
    async fn get_app(&self, id: &AppId) -> Option<Arc<dyn App>>;

    /// Diagnostic log line.
    fn log(&self, message: &str);

    /// Ask the user for a save destination. `Ok(None)` means cancelled.
    async fn select_save_file(&self, options: SaveFileOptions) -> CoreResult<Option<PathBuf>>;

    /// Store `content` in the host-managed default save slot `name`.
    async fn save_file(&self, name: &str, content: &[u8]) -> CoreResult<()>;

    /// Write `content` to `path`.
    async fn write_file(&self, path: &Path, content: &[u8]) -> CoreResult<()>;
}

/// Port for an application surface reachable over the message bus.
///
/// Implemented by:
/// - `pageport_adapters::bus::ChannelApp`
pub trait App: Send + Sync {
    fn id(&self) -> &AppId;

    /// Fire-and-forget delivery of `message` to this surface.
    fn send(&self, message: Message);
}

/// Port for the project data store.
///
/// Implemented by:
/// - `pageport_adapters::store::InMemoryProjectStore`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataHost: Send + Sync {
    async fn get_project(&self, id: &ProjectId) -> Option<Project>;
}

/// Port for the HTML export engine.
///
/// Implemented by:
/// - `pageport_adapters::engine::TemplateEngine`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportEngine: Send + Sync {
    /// Render `project` into a fresh virtual filesystem.
    ///
    /// # Arguments
    ///
    /// * `project` - The project to render
    /// * `location` - Root of the export templates and assets
    async fn export_html_project(
        &self,
        project: &Project,
        location: &ExportLocation,
    ) -> Result<Box<dyn VirtualFilesystem>, EngineError>;
}

/// Port for an in-memory filesystem produced by the export engine.
///
/// Paths are absolute within the virtual filesystem and rooted at `/`.
///
/// Implemented by:
/// - `pageport_adapters::vfs::MemoryFilesystem`
pub trait VirtualFilesystem: Send + Sync + std::fmt::Debug {
    /// Names of the entries directly below `path`, in the filesystem's order.
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, VfsError>;

    /// Full content of the file at `path`.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, VfsError>;
}

/// Failure reported by an export engine.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Options for [`Host::select_save_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFileOptions {
    pub default_path: PathBuf,
    pub title: String,
    pub filters: Vec<FileFilter>,
}

/// A named set of accepted file extensions in a save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl SaveFileOptions {
    /// Dialog options for saving `project_name` as `default_name`.
    pub fn html_export(project_name: &str, default_name: &str) -> Self {
        Self {
            default_path: PathBuf::from(format!("/{default_name}")),
            title: format!("Export {project_name} as HTML file"),
            filters: vec![FileFilter {
                name: project_name.to_string(),
                extensions: vec!["html".into(), "htm".into()],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_export_dialog_options() {
        let options = SaveFileOptions::html_export("Landing", "Landing.html");
        assert_eq!(options.default_path, PathBuf::from("/Landing.html"));
        assert_eq!(options.title, "Export Landing as HTML file");
        assert_eq!(options.filters[0].name, "Landing");
        assert_eq!(options.filters[0].extensions, vec!["html", "htm"]);
    }

    #[test]
    fn engine_error_keeps_source() {
        let err = EngineError::with_source("render failed", std::io::Error::other("disk"));
        assert_eq!(err.to_string(), "render failed");
        assert_eq!(StdError::source(&err).unwrap().to_string(), "disk");
    }
}
