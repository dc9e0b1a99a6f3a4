//! Export Service - handler for `ExportHtmlProject` requests.
//!
//! This service coordinates the whole export workflow:
//! 1. Resolve the requesting app, the project, and the export location
//! 2. Resolve the target path (explicit or via the host's save dialog)
//! 3. Render the project through the export engine
//! 4. Extract the rendered file and persist it through the host
//!
//! Requests that cannot have come from a live UI (unknown app or project, no
//! export location, no target on a desktop host) are dropped with a host log
//! line. Everything that fails after that point is reported to the app as a
//! single `ShowError` message.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{App, DataHost, ExportEngine, Host, SaveFileOptions},
        services::{
            invocation::{ExportOutcome, invoke_export},
            vfs_reader::extract_first_file,
        },
    },
    domain::{
        ErrorReport, ExportHtmlProject, ExportLocation, FailureNotification, FsOutcome, Message,
        Project, ShowError, TransactionId,
    },
    error::CoreResult,
};

const LOG_PREFIX: &str = "export-html-project";

/// Handler for HTML export requests.
pub struct ExportService {
    host: Arc<dyn Host>,
    data_host: Arc<dyn DataHost>,
    engine: Arc<dyn ExportEngine>,
    location: Option<ExportLocation>,
}

impl ExportService {
    /// Create a new export service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pageport_core::application::ExportService;
    ///
    /// let service = ExportService::new(
    ///     host,      // Arc<dyn Host>
    ///     data_host, // Arc<dyn DataHost>
    ///     engine,    // Arc<dyn ExportEngine>
    ///     Some(location),
    /// );
    /// ```
    pub fn new(
        host: Arc<dyn Host>,
        data_host: Arc<dyn DataHost>,
        engine: Arc<dyn ExportEngine>,
        location: Option<ExportLocation>,
    ) -> Self {
        Self {
            host,
            data_host,
            engine,
            location,
        }
    }

    /// Handle one export request.
    ///
    /// The outcome is only observable through its effects: files written by
    /// the host, a `ShowError` sent to the app, or a host log line.
    #[instrument(
        skip_all,
        fields(
            transaction = %message.transaction,
            project_id = %message.payload.project_id
        )
    )]
    pub async fn handle(&self, message: ExportHtmlProject) {
        let app = match &message.app_id {
            Some(id) => self.host.get_app(id).await,
            None => None,
        };
        let Some(app) = app else {
            self.drop_request(&format!("received message without resolvable app: {message}"));
            return;
        };

        let Some(project) = self.data_host.get_project(&message.payload.project_id).await else {
            self.drop_request(&format!(
                "received message without resolvable project: {message}"
            ));
            return;
        };

        let Some(location) = &self.location else {
            self.drop_request(&format!("received message without location: {message}"));
            return;
        };

        if let Err(e) = self.execute(&message, &project, location, app.as_ref()).await {
            self.report_failure(
                app.as_ref(),
                &message.transaction,
                &project,
                ErrorReport::from_error(&e),
            );
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Steps that run once the request is known to be legitimate.
    ///
    /// `Err` is reserved for port failures; engine and extraction failures are
    /// reported here and end with `Ok`.
    async fn execute(
        &self,
        message: &ExportHtmlProject,
        project: &Project,
        location: &ExportLocation,
        app: &dyn App,
    ) -> CoreResult<()> {
        let target = self.resolve_target_path(message, project).await?;

        if target.is_none() && self.host.host_type().requires_target_path() {
            self.drop_request(&format!("no target path for {} host", self.host.host_type()));
            return Ok(());
        }

        let fs = match invoke_export(self.engine.as_ref(), project, location).await {
            ExportOutcome::Success(fs) => fs,
            ExportOutcome::Failure(report) => {
                self.report_failure(app, &message.transaction, project, report);
                return Ok(());
            }
        };

        let content = match extract_first_file(fs.as_ref()) {
            FsOutcome::Success(content) => content,
            FsOutcome::Error(e) => {
                self.report_failure(
                    app,
                    &message.transaction,
                    project,
                    ErrorReport::from_error(&e),
                );
                return Ok(());
            }
        };

        let default_name = project.default_file_name();
        self.host.save_file(&default_name, &content).await?;

        let destination = target.unwrap_or_else(|| PathBuf::from(&default_name));
        self.host.write_file(&destination, &content).await?;

        info!(
            destination = %destination.display(),
            bytes = content.len(),
            "HTML export written"
        );
        Ok(())
    }

    /// Explicit path wins; otherwise the host is asked with a default name.
    async fn resolve_target_path(
        &self,
        message: &ExportHtmlProject,
        project: &Project,
    ) -> CoreResult<Option<PathBuf>> {
        if let Some(path) = &message.payload.path {
            let name = display_name(path).unwrap_or_else(|| project.default_file_name());
            debug!(name = %name, path = %path.display(), "Using explicit export path");
            return Ok(Some(path.clone()));
        }

        let name = project.default_file_name();
        let options = SaveFileOptions::html_export(project.name(), &name);
        let selected = self.host.select_save_file(options).await?;
        debug!(selected = ?selected, "Save dialog answered");
        Ok(selected)
    }

    fn drop_request(&self, reason: &str) {
        debug!(reason = %reason, "Dropping export request");
        self.host.log(&format!("{LOG_PREFIX}: {reason}"));
    }

    fn report_failure(
        &self,
        app: &dyn App,
        transaction: &TransactionId,
        project: &Project,
        error: ErrorReport,
    ) {
        warn!(
            app = %app.id(),
            error = %error.message,
            "HTML export failed"
        );
        let notification = FailureNotification::html_export_failed(project.name(), error);
        app.send(Message::ShowError(ShowError::new(
            transaction.clone(),
            notification,
        )));
    }
}

fn display_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
