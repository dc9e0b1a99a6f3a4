//! Extraction of the exported artifact from an engine-produced filesystem.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::VirtualFilesystem,
    domain::{FsOutcome, VfsError},
};

/// Read the first entry listed at the root of `fs`.
///
/// "First" is whatever the filesystem lists first; no sorting is applied.
/// Listing and read failures are returned as [`FsOutcome::Error`]. An empty
/// root has no first entry, so the read of the root's missing child fails
/// with [`VfsError::NotFound`].
#[instrument(skip_all)]
pub fn extract_first_file(fs: &dyn VirtualFilesystem) -> FsOutcome<Vec<u8>> {
    let root = Path::new("/");

    let entries = match fs.read_dir(root) {
        Ok(entries) => entries,
        Err(e) => return FsOutcome::Error(e),
    };

    let Some(first) = entries.into_iter().next() else {
        debug!("Export produced an empty root directory");
        return FsOutcome::Error(VfsError::NotFound {
            path: root.to_path_buf(),
        });
    };

    let path = root.join(&first);
    debug!(path = %path.display(), "Reading exported artifact");
    fs.read_file(&path).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Listing order is the insertion order, deliberately not alphabetical.
    #[derive(Debug, Default)]
    struct ListFs {
        files: Vec<(String, Vec<u8>)>,
        broken_dir: bool,
    }

    impl VirtualFilesystem for ListFs {
        fn read_dir(&self, path: &Path) -> Result<Vec<String>, VfsError> {
            if self.broken_dir {
                return Err(VfsError::Io {
                    operation: "read_dir",
                    path: path.to_path_buf(),
                    reason: "device gone".into(),
                });
            }
            Ok(self.files.iter().map(|(name, _)| name.clone()).collect())
        }

        fn read_file(&self, path: &Path) -> Result<Vec<u8>, VfsError> {
            self.files
                .iter()
                .find(|(name, _)| Path::new("/").join(name) == path)
                .map(|(_, content)| content.clone())
                .ok_or_else(|| VfsError::NotFound {
                    path: path.to_path_buf(),
                })
        }
    }

    #[test]
    fn reads_single_file() {
        let fs = ListFs {
            files: vec![("index.html".into(), b"<html></html>".to_vec())],
            ..Default::default()
        };

        assert_eq!(
            extract_first_file(&fs),
            FsOutcome::Success(b"<html></html>".to_vec())
        );
    }

    #[test]
    fn takes_first_in_listing_order() {
        let fs = ListFs {
            files: vec![
                ("zeta.html".into(), b"z".to_vec()),
                ("alpha.html".into(), b"a".to_vec()),
            ],
            ..Default::default()
        };

        assert_eq!(extract_first_file(&fs), FsOutcome::Success(b"z".to_vec()));
    }

    #[test]
    fn empty_root_is_an_error() {
        let outcome = extract_first_file(&ListFs::default());
        assert_eq!(
            outcome,
            FsOutcome::Error(VfsError::NotFound {
                path: PathBuf::from("/")
            })
        );
    }

    #[test]
    fn listing_failure_is_an_error() {
        let fs = ListFs {
            broken_dir: true,
            ..Default::default()
        };

        let outcome = extract_first_file(&fs);
        assert!(outcome.is_error());
        assert!(
            outcome
                .into_result()
                .unwrap_err()
                .to_string()
                .contains("device gone")
        );
    }
}
