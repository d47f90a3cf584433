//! Generator configuration loading from the project directory.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::config::parse_config_content;
use crate::domain::layout::CONFIG_FILE;
use crate::domain::{AppError, GeneratorConfig};
use crate::ports::ProjectFilesystem;

/// Load `crudgen.toml` from the project, or from `explicit` when given.
///
/// A missing project config yields defaults. A missing explicit config is an error.
pub fn load_config<F: ProjectFilesystem>(
    project: &F,
    explicit: Option<&Path>,
) -> Result<GeneratorConfig, AppError> {
    let content = match explicit {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Err(err) => return Err(err.into()),
        },
        None => project.read_optional(CONFIG_FILE)?,
    };

    match content {
        Some(content) => {
            debug!(explicit = explicit.is_some(), "loaded generator config");
            parse_config_content(&content)
        }
        None => {
            debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(GeneratorConfig::default())
        }
    }
}
