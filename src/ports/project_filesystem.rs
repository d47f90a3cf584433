//! Project-level filesystem operations.
//!
//! This port is the only I/O seam of the generator. All `path` arguments are
//! relative to the project root; implementations must reject paths that
//! escape it.

use crate::domain::AppError;

/// Result of a create-if-absent write at the port level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStatus {
    Created,
    AlreadyExists,
}

/// Port for low-level project filesystem operations.
pub trait ProjectFilesystem {
    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text. `Ok(None)` when the file does not exist.
    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError>;

    /// Write `content` to a new file.
    ///
    /// Never truncates: an existing file yields [`CreateStatus::AlreadyExists`]
    /// and is left untouched. The parent directory must already exist. The
    /// file is either fully written or not present afterwards.
    fn create_new(&self, path: &str, content: &str) -> Result<CreateStatus, AppError>;

    /// Append `content` to an existing file.
    fn append(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Create a directory and all parents. No-op if it already exists.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
