//! In-memory project store.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use pageport_core::{
    application::{ApplicationError, ports::DataHost},
    domain::{DomainError, Project, ProjectId},
    error::{Context, CoreResult},
};

/// Thread-safe in-memory project store.
#[derive(Clone)]
pub struct InMemoryProjectStore {
    inner: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with every project file below `dir` loaded.
    pub fn from_dir(dir: impl AsRef<Path>) -> CoreResult<Self> {
        let store = Self::new();
        store.load_dir(dir.as_ref())?;
        Ok(store)
    }

    /// Load every `*.json` file below `dir` as a project.
    ///
    /// Files that are not valid project records are skipped with a warning.
    /// Returns the number of projects loaded.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load_dir(&self, dir: &Path) -> CoreResult<usize> {
        let mut loaded = 0;

        for walk_entry in WalkDir::new(dir).min_depth(1) {
            let walk_entry = walk_entry.context("project directory walk failed")?;
            let path = walk_entry.path();

            if !walk_entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("json")
            {
                continue;
            }

            match self.load_file(path) {
                Ok(id) => {
                    debug!(project = %id, path = %path.display(), "Project loaded");
                    loaded += 1;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping project file"),
            }
        }

        Ok(loaded)
    }

    /// Load a single project file and return its id.
    pub fn load_file(&self, path: &Path) -> CoreResult<ProjectId> {
        let source = std::fs::read_to_string(path).map_err(|e| ApplicationError::HostIo {
            operation: "read",
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let project = Project::from_json(&source)?;
        let id = project.id().clone();
        self.insert(project)?;
        Ok(id)
    }

    /// Insert or replace a project.
    pub fn insert(&self, project: Project) -> CoreResult<()> {
        project.validate()?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(project.id().clone(), project);
        Ok(())
    }

    /// Remove a project.
    pub fn remove(&self, id: &ProjectId) -> CoreResult<Project> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .remove(id)
            .ok_or_else(|| DomainError::InvalidProject(format!("no project with id {id}")).into())
    }

    /// Get the number of projects.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataHost for InMemoryProjectStore {
    async fn get_project(&self, id: &ProjectId) -> Option<Project> {
        match self.inner.read() {
            Ok(inner) => inner.get(id).cloned(),
            Err(_) => {
                warn!(project = %id, "Project store lock poisoned");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project::new(ProjectId::new(id).unwrap(), name).unwrap()
    }

    #[tokio::test]
    async fn get_returns_inserted_project() {
        let store = InMemoryProjectStore::new();
        store.insert(project("p-1", "Landing")).unwrap();

        let found = store.get_project(&ProjectId::new("p-1").unwrap()).await;
        assert_eq!(found.unwrap().name(), "Landing");
        assert!(
            store
                .get_project(&ProjectId::new("p-2").unwrap())
                .await
                .is_none()
        );
    }

    #[test]
    fn remove_unknown_project_fails() {
        let store = InMemoryProjectStore::new();
        assert!(store.remove(&ProjectId::new("p-1").unwrap()).is_err());
    }

    #[test]
    fn load_dir_reads_nested_json_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(
            dir.path().join("landing.json"),
            r#"{"id":"p-1","name":"Landing"}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("nested").join("docs.json"),
            r#"{"id":"p-2","name":"Docs"}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a project").unwrap();

        let store = InMemoryProjectStore::new();
        let loaded = store.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn from_dir_on_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(InMemoryProjectStore::from_dir(dir.path().join("missing")).is_err());
    }
}
