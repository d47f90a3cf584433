//! Create-if-absent write policy shared by every non-entry-point artifact.

use tracing::{debug, warn};

use crate::domain::{AppError, WriteOutcome};
use crate::ports::{CreateStatus, ProjectFilesystem};

/// Idempotent writer: creates a file only if absent and never truncates.
pub struct WriteGuard<'a, F: ProjectFilesystem> {
    filesystem: &'a F,
}

impl<'a, F: ProjectFilesystem> WriteGuard<'a, F> {
    pub fn new(filesystem: &'a F) -> Self {
        Self { filesystem }
    }

    /// Write the text produced by `render` to `path` unless the file already exists.
    ///
    /// `render` only runs when the file is absent. Render and filesystem errors
    /// are reported as [`WriteOutcome::Failed`], never propagated.
    pub fn write_if_absent<R>(&self, path: &str, render: R) -> WriteOutcome
    where
        R: FnOnce() -> Result<String, AppError>,
    {
        if self.filesystem.file_exists(path) {
            debug!(path, "file exists, skipping");
            return WriteOutcome::SkippedExisting;
        }
        let content = match render() {
            Ok(content) => content,
            Err(err) => {
                warn!(path, error = %err, "render failed");
                return WriteOutcome::Failed(err.to_string());
            }
        };
        match self.filesystem.create_new(path, &content) {
            Ok(CreateStatus::Created) => {
                debug!(path, bytes = content.len(), "created file");
                WriteOutcome::Created
            }
            Ok(CreateStatus::AlreadyExists) => {
                debug!(path, "file appeared before write, skipping");
                WriteOutcome::SkippedExisting
            }
            Err(err) => {
                warn!(path, error = %err, "write failed");
                WriteOutcome::Failed(err.to_string())
            }
        }
    }
}
