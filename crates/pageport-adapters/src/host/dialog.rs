//! Save dialog strategies for [`super::LocalHost`].

use std::io;
use std::path::PathBuf;

use pageport_core::application::ports::SaveFileOptions;

/// Blocking prompt for a save destination.
///
/// Runs on a blocking thread; `Ok(None)` means the user cancelled.
pub trait SaveDialog: Send + Sync {
    fn prompt(&self, options: &SaveFileOptions) -> io::Result<Option<PathBuf>>;
}

/// Dialog that never yields a path, for non-interactive hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialog;

impl SaveDialog for NoDialog {
    fn prompt(&self, _options: &SaveFileOptions) -> io::Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Dialog that always answers with the same path.
#[derive(Debug, Clone)]
pub struct FixedDialog(pub PathBuf);

impl SaveDialog for FixedDialog {
    fn prompt(&self, _options: &SaveFileOptions) -> io::Result<Option<PathBuf>> {
        Ok(Some(self.0.clone()))
    }
}
