use std::path::PathBuf;

use crate::domain::AppError;

pub(super) fn run_preview(
    artifact: &str,
    name: &str,
    fields: &[String],
    dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let text = match dir {
        Some(dir) => crate::app::api::preview_at(dir, artifact, name, fields, config.as_deref())?,
        None => crate::app::api::preview(artifact, name, fields, config.as_deref())?,
    };
    print!("{}", text);
    Ok(())
}
