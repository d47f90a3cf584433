use include_dir::{Dir, DirEntry};
use std::path::Path;

use crate::domain::AppError;

#[derive(Debug, Clone, Copy)]
pub struct AssetSourceFile {
    pub content: &'static str,
    relative_path: &'static str,
}

impl AssetSourceFile {
    pub fn is_template(&self) -> bool {
        self.relative_path.ends_with(".j2")
    }

    pub fn template_name(&self) -> &'static str {
        self.relative_path
    }
}

pub fn collect_asset_sources(asset_dir: &'static Dir<'static>) -> Result<Vec<AssetSourceFile>, AppError> {
    let mut files = Vec::new();
    collect_entries(asset_dir, asset_dir.path(), &mut files)?;
    files.sort_by(|a, b| a.relative_path.cmp(b.relative_path));
    Ok(files)
}

fn collect_entries(
    dir: &'static Dir<'static>,
    base_path: &Path,
    files: &mut Vec<AssetSourceFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Server template is not UTF-8: {}",
                        file.path().to_string_lossy()
                    ))
                })?;

                let file_path: &'static Path = file.path();
                let relative_path = file_path
                    .strip_prefix(base_path)
                    .ok()
                    .and_then(|path| path.to_str())
                    .ok_or_else(|| {
                        AppError::InternalError(format!(
                            "Server template has unexpected path: {}",
                            file_path.to_string_lossy()
                        ))
                    })?;

                files.push(AssetSourceFile { content, relative_path });
            }
            DirEntry::Dir(subdir) => collect_entries(subdir, base_path, files)?,
        }
    }

    Ok(())
}
