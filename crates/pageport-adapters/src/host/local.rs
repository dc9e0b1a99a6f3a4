//! Host adapter backed by the local machine.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, RwLock},
};

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use pageport_core::{
    application::{
        ApplicationError,
        ports::{App, Host, SaveFileOptions},
    },
    domain::{AppId, HostType},
    error::CoreResult,
};

use crate::host::{NoDialog, SaveDialog, disk};

/// Host running on the local machine.
///
/// - Apps are registered up front and looked up by id.
/// - `save_file` writes into a default save directory.
/// - `write_file` writes to the given path, creating parent directories.
///   Relative paths resolve against the save directory.
/// - `select_save_file` delegates to a [`SaveDialog`] on a blocking thread.
pub struct LocalHost {
    host_type: HostType,
    save_dir: PathBuf,
    apps: RwLock<HashMap<AppId, Arc<dyn App>>>,
    dialog: Arc<dyn SaveDialog>,
    written: Mutex<Vec<PathBuf>>,
}

impl LocalHost {
    /// Create a host with no apps and no dialog.
    pub fn new(host_type: HostType, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            host_type,
            save_dir: save_dir.into(),
            apps: RwLock::new(HashMap::new()),
            dialog: Arc::new(NoDialog),
            written: Mutex::new(Vec::new()),
        }
    }

    pub fn with_dialog(mut self, dialog: Arc<dyn SaveDialog>) -> Self {
        self.dialog = dialog;
        self
    }

    /// Make `app` reachable through [`Host::get_app`].
    pub fn register_app(&self, app: Arc<dyn App>) -> CoreResult<()> {
        let mut apps = self
            .apps
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        apps.insert(app.id().clone(), app);
        Ok(())
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Every path written so far, default save slots included, in write order.
    pub fn written(&self) -> Vec<PathBuf> {
        self.written
            .lock()
            .map(|written| written.clone())
            .unwrap_or_default()
    }

    fn record(&self, path: &Path) {
        match self.written.lock() {
            Ok(mut written) => written.push(path.to_path_buf()),
            Err(_) => warn!(path = %path.display(), "Write log lock poisoned"),
        }
    }
}

#[async_trait]
impl Host for LocalHost {
    fn host_type(&self) -> HostType {
        self.host_type
    }

    async fn get_app(&self, id: &AppId) -> Option<Arc<dyn App>> {
        self.apps.read().ok()?.get(id).cloned()
    }

    fn log(&self, message: &str) {
        info!(target: "pageport::host", "{message}");
    }

    #[instrument(skip_all, fields(title = %options.title))]
    async fn select_save_file(&self, options: SaveFileOptions) -> CoreResult<Option<PathBuf>> {
        let dialog = Arc::clone(&self.dialog);

        let answer = tokio::task::spawn_blocking(move || dialog.prompt(&options))
            .await
            .map_err(|e| ApplicationError::DialogFailed {
                reason: e.to_string(),
            })?
            .map_err(|e| ApplicationError::DialogFailed {
                reason: e.to_string(),
            })?;

        debug!(answer = ?answer, "Save dialog closed");
        Ok(answer)
    }

    async fn save_file(&self, name: &str, content: &[u8]) -> CoreResult<()> {
        let path = self.save_dir.join(name);
        disk::write(&path, content).await?;
        self.record(&path);
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> CoreResult<()> {
        let path = self.save_dir.join(path);
        disk::write(&path, content).await?;
        self.record(&path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedDialog;
    use pageport_core::domain::Message;

    struct NullApp(AppId);

    impl App for NullApp {
        fn id(&self) -> &AppId {
            &self.0
        }

        fn send(&self, _message: Message) {}
    }

    #[tokio::test]
    async fn registered_apps_resolve() {
        let host = LocalHost::new(HostType::Headless, "/tmp");
        host.register_app(Arc::new(NullApp(AppId::new("main").unwrap())))
            .unwrap();

        assert!(host.get_app(&AppId::new("main").unwrap()).await.is_some());
        assert!(host.get_app(&AppId::new("other").unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn save_file_lands_in_save_dir() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(HostType::Headless, dir.path().join("saves"));

        host.save_file("Landing.html", b"<html></html>").await.unwrap();

        let expected = dir.path().join("saves").join("Landing.html");
        assert_eq!(std::fs::read(&expected).unwrap(), b"<html></html>");
        assert_eq!(host.written(), vec![expected]);
    }

    #[tokio::test]
    async fn write_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(HostType::Headless, dir.path());
        let target = dir.path().join("out").join("site.html");

        host.write_file(&target, b"x").await.unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"x");
        assert_eq!(host.written(), vec![target]);
    }

    #[tokio::test]
    async fn relative_write_resolves_against_save_dir() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(HostType::Headless, dir.path());

        host.write_file(Path::new("Landing.html"), b"x").await.unwrap();

        assert!(dir.path().join("Landing.html").is_file());
    }

    #[tokio::test]
    async fn dialog_answer_is_returned() {
        let host = LocalHost::new(HostType::Desktop, "/tmp")
            .with_dialog(Arc::new(FixedDialog(PathBuf::from("/picked.html"))));

        let answer = host
            .select_save_file(SaveFileOptions::html_export("Landing", "Landing.html"))
            .await
            .unwrap();

        assert_eq!(answer, Some(PathBuf::from("/picked.html")));
    }

    #[tokio::test]
    async fn default_dialog_cancels() {
        let host = LocalHost::new(HostType::Headless, "/tmp");
        let answer = host
            .select_save_file(SaveFileOptions::html_export("Landing", "Landing.html"))
            .await
            .unwrap();
        assert!(answer.is_none());
    }
}
