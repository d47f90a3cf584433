//! `ProjectFilesystem` implementation for `FilesystemStore`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};

use tempfile::Builder;

use crate::domain::AppError;
use crate::ports::{CreateStatus, ProjectFilesystem};

use super::FilesystemStore;

impl ProjectFilesystem for FilesystemStore {
    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }

    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn create_new(&self, path: &str, content: &str) -> Result<CreateStatus, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if full_path.exists() {
            return Ok(CreateStatus::AlreadyExists);
        }

        let parent = full_path.parent().ok_or_else(|| {
            AppError::InternalError(format!("Path has no parent directory: {}", path))
        })?;

        // Stage next to the target so the final rename stays on one filesystem.
        let mut staged = Builder::new().prefix(".crudgen-").suffix(".tmp").tempfile_in(parent)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        match staged.persist_noclobber(&full_path) {
            Ok(_) => Ok(CreateStatus::Created),
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateStatus::AlreadyExists)
            }
            Err(err) => Err(AppError::from(err.error)),
        }
    }

    fn append(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        let mut file = OpenOptions::new().append(true).open(full_path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }
}
