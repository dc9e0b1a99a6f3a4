//! Local disk writes using `tokio::fs`.

use std::io;
use std::path::Path;

use pageport_core::{application::ApplicationError, error::CoreResult};

/// Write `content` to `path`, creating missing parent directories.
pub async fn write(path: &Path, content: &[u8]) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| map_io_error(parent, e, "create directory"))?;
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|e| map_io_error(path, e, "write"))
}

pub fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &'static str,
) -> pageport_core::error::CoreError {
    ApplicationError::HostIo {
        operation,
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
