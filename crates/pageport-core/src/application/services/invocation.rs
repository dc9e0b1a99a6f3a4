//! Export engine invocation and outcome classification.

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{ExportEngine, VirtualFilesystem},
    domain::{ErrorReport, ExportLocation, Project},
};

/// Result of asking the engine to render a project.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The engine rendered into this filesystem.
    Success(Box<dyn VirtualFilesystem>),
    /// The engine failed; the report is what the user will see.
    Failure(ErrorReport),
}

/// Run `engine` for `project` and classify what it returned.
///
/// Nothing is written to disk here.
#[instrument(skip_all, fields(project = %project.name(), location = %location))]
pub async fn invoke_export(
    engine: &dyn ExportEngine,
    project: &Project,
    location: &ExportLocation,
) -> ExportOutcome {
    match engine.export_html_project(project, location).await {
        Ok(fs) => {
            info!("Export engine finished");
            ExportOutcome::Success(fs)
        }
        Err(e) => {
            warn!(error = %e, "Export engine failed");
            ExportOutcome::Failure(ErrorReport::from_error(&e))
        }
    }
}
