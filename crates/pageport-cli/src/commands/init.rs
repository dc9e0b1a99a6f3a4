//! `pageport init`: write the default configuration and seed the export
//! location with the built-in template.

use std::path::Path;

use tracing::debug;

use pageport_adapters::{DEFAULT_TEMPLATE, TemplateEngine};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = global.config.unwrap_or_else(AppConfig::config_path);
    let toml = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    write_unless_present(&config_path, &toml, args.force, &output, "Configuration")?;

    let template_path = config
        .export
        .location
        .join(TemplateEngine::DEFAULT_TEMPLATE_NAME);
    write_unless_present(
        &template_path,
        DEFAULT_TEMPLATE,
        args.force,
        &output,
        "Template",
    )?;

    Ok(())
}

/// Existing files are only replaced with `--force`.
fn write_unless_present(
    path: &Path,
    content: &str,
    force: bool,
    output: &OutputManager,
    what: &str,
) -> CliResult<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "{what} already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    debug!(path = %path.display(), bytes = content.len(), "File written");
    output.success(&format!("{what} created at {}", path.display()))?;
    Ok(())
}
