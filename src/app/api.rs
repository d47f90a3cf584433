//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemStore;
use crate::app::services::ArtifactRenderer;
use crate::app::{
    AppContext,
    commands::{generate, preview},
};
use crate::domain::ResourceDescriptor;

pub use crate::app::commands::preview::PreviewTarget;
pub use crate::domain::{
    AppError, ArtifactKind, ArtifactReport, GenerationReport, GeneratorConfig, WriteOutcome,
};

/// Create an `AppContext` rooted at `path`, loading its generator config.
fn create_context(
    path: PathBuf,
    config_path: Option<&Path>,
) -> Result<AppContext<FilesystemStore>, AppError> {
    let project = FilesystemStore::new(path);
    let config = crate::app::config::load_config(&project, config_path)?;
    let renderer = ArtifactRenderer::new(config)?;
    Ok(AppContext::new(project, renderer))
}

/// Scaffold a resource into the current directory.
pub fn generate<S: AsRef<str>>(
    name: &str,
    fields: &[S],
    config_path: Option<&Path>,
) -> Result<GenerationReport, AppError> {
    generate_at(std::env::current_dir()?, name, fields, config_path)
}

/// Scaffold a resource into the project at `path`.
///
/// Input is validated before the config is read or anything is written.
pub fn generate_at<S: AsRef<str>>(
    path: impl Into<PathBuf>,
    name: &str,
    fields: &[S],
    config_path: Option<&Path>,
) -> Result<GenerationReport, AppError> {
    let descriptor = ResourceDescriptor::parse(name, fields)?;
    let ctx = create_context(path.into(), config_path)?;
    Ok(generate::generate(&ctx, &descriptor))
}

/// Render one artifact for the project in the current directory.
pub fn preview<S: AsRef<str>>(
    artifact: &str,
    name: &str,
    fields: &[S],
    config_path: Option<&Path>,
) -> Result<String, AppError> {
    preview_at(std::env::current_dir()?, artifact, name, fields, config_path)
}

/// Render one artifact using the config of the project at `path`. Nothing is written.
pub fn preview_at<S: AsRef<str>>(
    path: impl Into<PathBuf>,
    artifact: &str,
    name: &str,
    fields: &[S],
    config_path: Option<&Path>,
) -> Result<String, AppError> {
    let target = PreviewTarget::parse(artifact)?;
    let descriptor = ResourceDescriptor::parse(name, fields)?;
    let ctx = create_context(path.into(), config_path)?;
    preview::execute(ctx.renderer(), target, &descriptor)
}
