use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::TempPath;

const TEMP_FILE_PREFIX: &str = "voxbridge-";

/// A temporary file removed when the guard drops, on every exit path.
///
/// Removal failures are logged and never propagated so they cannot replace
/// the outcome of the work that used the file.
#[derive(Debug)]
pub struct ScopedTempFile {
    path: TempPath,
}

impl ScopedTempFile {
    /// Writes `bytes` to a fresh file in `dir`.
    pub fn persist(dir: &Path, suffix: &str, bytes: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(suffix)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        let guard = Self {
            path: file.into_temp_path(),
        };
        tracing::debug!(path = %guard.path().display(), bytes = bytes.len(), "Temporary input saved");
        Ok(guard)
    }

    /// Reserves an empty file in `dir` for a later writer.
    pub fn reserve(dir: &Path, suffix: &str) -> std::io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(suffix)
            .tempfile_in(dir)?;

        let guard = Self {
            path: file.into_temp_path(),
        };
        tracing::debug!(path = %guard.path().display(), "Temporary file reserved");
        Ok(guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScopedTempFile {
    // The inner `TempPath` retries removal silently afterwards.
    fn drop(&mut self) {
        let removed = self.path();

        match std::fs::remove_file(removed) {
            Ok(()) => tracing::debug!(path = %removed.display(), "Temporary file removed"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::error!(
                path = %removed.display(),
                error = %e,
                "Failed to remove temporary file"
            ),
        }
    }
}
