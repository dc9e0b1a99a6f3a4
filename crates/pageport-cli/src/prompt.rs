//! Terminal save prompt used when the CLI acts as an interactive host.

use std::io;
use std::path::PathBuf;

use dialoguer::{Input, theme::ColorfulTheme};

use pageport_adapters::SaveDialog;
use pageport_core::application::ports::SaveFileOptions;

/// Asks for a destination on the terminal; an empty answer cancels.
#[derive(Debug, Default)]
pub struct TerminalDialog;

impl SaveDialog for TerminalDialog {
    fn prompt(&self, options: &SaveFileOptions) -> io::Result<Option<PathBuf>> {
        let suggested = options
            .default_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} (empty to cancel)", options.title))
            .with_initial_text(suggested)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)?;

        Ok(complete_answer(answer.trim(), options))
    }
}

/// Empty means cancelled; a bare name gets the first accepted extension.
fn complete_answer(answer: &str, options: &SaveFileOptions) -> Option<PathBuf> {
    if answer.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(answer);
    if path.extension().is_none() {
        if let Some(ext) = options.filters.first().and_then(|f| f.extensions.first()) {
            path.set_extension(ext);
        }
    }
    Some(path)
}
