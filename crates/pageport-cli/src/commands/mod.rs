//! Command handlers, one module per subcommand.

pub mod completions;
pub mod export;
pub mod init;
pub mod listen;

use std::io::IsTerminal as _;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use pageport_adapters::{ChannelApp, InMemoryProjectStore, LocalHost, TemplateEngine};
use pageport_core::{
    application::ExportService,
    domain::{AppId, ExportLocation, HostType, Message},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Adapters and service assembled for one command run.
pub(crate) struct Wiring {
    pub host: Arc<LocalHost>,
    pub app_id: AppId,
    pub inbox: UnboundedReceiver<Message>,
    pub service: Arc<ExportService>,
}

impl Wiring {
    pub fn new(
        store: InMemoryProjectStore,
        host: LocalHost,
        location: PathBuf,
        config: &AppConfig,
    ) -> CliResult<Self> {
        let app_id = AppId::new(&config.bus.app_id).map_err(|e| CliError::ConfigError {
            message: "bus.app_id must not be empty".into(),
            source: Some(Box::new(e)),
        })?;

        let host = Arc::new(host);
        let (app, inbox) = ChannelApp::new(app_id.clone());
        host.register_app(app)?;

        debug!(
            app = %app_id,
            location = %location.display(),
            save_dir = %host.save_dir().display(),
            "Export service wired"
        );

        let service = ExportService::new(
            host.clone(),
            Arc::new(store),
            Arc::new(TemplateEngine::new()),
            Some(ExportLocation::new(location)),
        );

        Ok(Self {
            host,
            app_id,
            inbox,
            service: Arc::new(service),
        })
    }
}

/// Desktop hosts prompt for a destination, so they need a terminal, the
/// `interactive` feature, and nothing turning prompts off.
pub(crate) fn host_type(global: &GlobalArgs, config: &AppConfig) -> HostType {
    let can_prompt = cfg!(feature = "interactive")
        && config.host.interactive
        && !global.no_input
        && std::io::stdin().is_terminal();

    if can_prompt {
        HostType::Desktop
    } else {
        HostType::Headless
    }
}

/// `LocalHost` for `host_type`, with the terminal prompt attached when it
/// can be shown.
pub(crate) fn local_host(host_type: HostType, save_dir: PathBuf) -> LocalHost {
    let host = LocalHost::new(host_type, save_dir);

    #[cfg(feature = "interactive")]
    if host_type == HostType::Desktop {
        return host.with_dialog(Arc::new(crate::prompt::TerminalDialog));
    }

    host
}
