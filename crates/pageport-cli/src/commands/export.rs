//! Implementation of the `pageport export` command.
//!
//! Responsibility: load one project file, send a single export request
//! through the same service the message bus uses, and turn what the app
//! receives back into CLI output. No export logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use pageport_adapters::InMemoryProjectStore;
use pageport_core::domain::{ExportHtmlProject, HostType, Message, ProjectId};

use crate::{
    cli::{ExportArgs, GlobalArgs},
    commands::{Wiring, host_type, local_host},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Result line printed in `--output-format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportSummary<'a> {
    project_id: &'a ProjectId,
    transaction: String,
    written: &'a [PathBuf],
}

#[instrument(skip_all, fields(project = %args.project.display()))]
pub async fn execute(
    args: ExportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = InMemoryProjectStore::new();
    let project_id = store
        .load_file(&args.project)
        .map_err(|source| CliError::ProjectLoad {
            path: args.project.clone(),
            source,
        })?;

    let location = args.location.unwrap_or_else(|| config.export.location.clone());
    let save_dir = args.save_dir.unwrap_or_else(|| config.export.save_dir.clone());
    let host_type = host_type(&global, &config);
    let host = local_host(host_type, save_dir);

    let Wiring {
        host,
        app_id,
        mut inbox,
        service,
    } = Wiring::new(store, host, location, &config)?;

    let prompts = will_prompt(host_type, args.path.is_some());
    let mut request = ExportHtmlProject::new(app_id, project_id.clone());
    if let Some(path) = args.path {
        request = request.with_path(path);
    }
    let transaction = request.transaction.to_string();
    debug!(request = %request, "Sending export request");

    // The save prompt draws on stderr too; a ticking spinner would overwrite it.
    let spinner = if prompts {
        None
    } else {
        output.spinner(&format!("Exporting {}", project_id))
    };
    service.handle(request).await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    // The service reports failures through the app; anything queued is ours.
    while let Ok(message) = inbox.try_recv() {
        if let Message::ShowError(error) = message {
            debug!(stack = %error.payload.error.stack, "Export failure stack");
            return Err(CliError::ExportFailed {
                message: error.payload.message,
                detail: error.payload.detail,
            });
        }
    }

    let written = host.written();
    let Some(destination) = written.last() else {
        return Err(CliError::NothingExported {
            reason: "no destination was chosen".into(),
        });
    };

    info!(destination = %destination.display(), "Export finished");
    output.success(&format!(
        "Exported {} to {}",
        project_id,
        destination.display()
    ))?;
    output.json(&ExportSummary {
        project_id: &project_id,
        transaction,
        written: &written,
    })?;

    Ok(())
}

/// Desktop hosts get the terminal save prompt unless a path was passed.
fn will_prompt(host_type: HostType, has_path: bool) -> bool {
    host_type == HostType::Desktop && !has_path
}
