//! Implementation of the `pageport listen` command.
//!
//! Stdin carries one JSON message per line. Every `ExportHtmlProject` is
//! handled in its own task; every message the app surface receives is
//! written to stdout as one JSON line. Logs stay on stderr.

use tokio::{
    io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader},
    task::JoinSet,
};
use tracing::{debug, info, instrument, warn};

use pageport_adapters::InMemoryProjectStore;
use pageport_core::{
    domain::{ExportHtmlProject, HostType, Message},
    error::CoreError,
};

use crate::{
    cli::ListenArgs,
    commands::{Wiring, local_host},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

#[derive(Debug, Default, PartialEq, Eq)]
struct ListenStats {
    requests: usize,
    ignored: usize,
    malformed: usize,
}

#[instrument(skip_all, fields(projects = %args.projects.display()))]
pub async fn execute(args: ListenArgs, config: AppConfig) -> CliResult<()> {
    let store = InMemoryProjectStore::new();
    let loaded = store
        .load_dir(&args.projects)
        .map_err(|source| CliError::ProjectLoad {
            path: args.projects.clone(),
            source,
        })?;
    info!(loaded, "Projects loaded");

    let location = args.location.unwrap_or_else(|| config.export.location.clone());
    let save_dir = args.save_dir.unwrap_or_else(|| config.export.save_dir.clone());
    // stdin is the message stream, so nobody can answer a prompt.
    let host = local_host(HostType::Headless, save_dir);

    let Wiring {
        mut inbox, service, ..
    } = Wiring::new(store, host, location, &config)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut tasks = JoinSet::new();
    let mut stats = ListenStats::default();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.with_cli_context(|| "failed to read stdin")? else {
                    break;
                };
                if let Some(request) = route(&line, &mut stats) {
                    let service = service.clone();
                    tasks.spawn(async move { service.handle(request).await });
                }
            }
            Some(message) = inbox.recv() => write_message(&mut stdout, &message).await?,
        }
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            warn!(error = %e, "Export task did not complete");
        }
    }
    while let Ok(message) = inbox.try_recv() {
        write_message(&mut stdout, &message).await?;
    }

    info!(
        requests = stats.requests,
        ignored = stats.ignored,
        malformed = stats.malformed,
        "Input closed"
    );
    Ok(())
}

/// Decide what to do with one input line.
fn route(line: &str, stats: &mut ListenStats) -> Option<ExportHtmlProject> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match Message::from_json(line) {
        Ok(Message::ExportHtmlProject(request)) => {
            stats.requests += 1;
            debug!(request = %request, "Request received");
            Some(request)
        }
        Ok(other) => {
            stats.ignored += 1;
            debug!(transaction = %other.transaction(), "Ignoring outbound-only message");
            None
        }
        Err(e) => {
            stats.malformed += 1;
            warn!(error = %e, "Skipping malformed input line");
            None
        }
    }
}

async fn write_message<W>(out: &mut W, message: &Message) -> CliResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = message.to_json().map_err(CoreError::from)?;
    line.push('\n');
    out.write_all(line.as_bytes())
        .await
        .with_cli_context(|| "failed to write to stdout")?;
    out.flush()
        .await
        .with_cli_context(|| "failed to flush stdout")
}
