//! In-memory virtual filesystem.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use pageport_core::{application::ports::VirtualFilesystem, domain::VfsError};

/// In-memory filesystem rooted at `/`.
///
/// Entries are kept in path order, so `read_dir` lists children sorted by
/// name. Cloning shares the underlying storage.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl Default for MemoryFilesystemInner {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
            directories: BTreeSet::from([PathBuf::from("/")]),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new filesystem containing only the root directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Builder-style [`Self::write_file`].
    pub fn with_file(
        self,
        path: impl AsRef<Path>,
        content: impl Into<Vec<u8>>,
    ) -> Result<Self, VfsError> {
        self.write_file(path.as_ref(), content)?;
        Ok(self)
    }

    /// Write a file, creating its parent directories.
    pub fn write_file(&self, path: &Path, content: impl Into<Vec<u8>>) -> Result<(), VfsError> {
        let path = absolute(path);
        let mut inner = self.inner.write().map_err(|_| poisoned("write", &path))?;

        if inner.directories.contains(&path) {
            return Err(VfsError::Io {
                operation: "write",
                path,
                reason: "is a directory".into(),
            });
        }

        let mut current = PathBuf::from("/");
        if let Some(parent) = path.parent() {
            for component in parent.components().skip(1) {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }

        inner.files.insert(path, content.into());
        Ok(())
    }

    /// Create a directory and all parent directories.
    pub fn create_dir_all(&self, path: &Path) -> Result<(), VfsError> {
        let path = absolute(path);
        let mut inner = self.inner.write().map_err(|_| poisoned("create_dir", &path))?;

        let mut current = PathBuf::from("/");
        for component in path.components().skip(1) {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    /// List all file paths.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of files stored.
    pub fn file_count(&self) -> usize {
        self.inner.read().map(|inner| inner.files.len()).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFilesystem for MemoryFilesystem {
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, VfsError> {
        let path = absolute(path);
        let inner = self.inner.read().map_err(|_| poisoned("read_dir", &path))?;

        if inner.files.contains_key(&path) {
            return Err(VfsError::NotADirectory { path });
        }
        if !inner.directories.contains(&path) {
            return Err(VfsError::NotFound { path });
        }

        let children: BTreeSet<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path.as_path()))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        Ok(children.into_iter().collect())
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, VfsError> {
        let path = absolute(path);
        let inner = self.inner.read().map_err(|_| poisoned("read", &path))?;

        if let Some(content) = inner.files.get(&path) {
            return Ok(content.clone());
        }
        if inner.directories.contains(&path) {
            return Err(VfsError::Io {
                operation: "read",
                path,
                reason: "is a directory".into(),
            });
        }
        Err(VfsError::NotFound { path })
    }
}

/// Anchor `path` at `/` and drop `.` components.
fn absolute(path: &Path) -> PathBuf {
    let mut out = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::ParentDir => {
                out.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    out
}

fn poisoned(operation: &'static str, path: &Path) -> VfsError {
    VfsError::Io {
        operation,
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
}
