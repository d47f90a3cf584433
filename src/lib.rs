//! crudgen: scaffold a CRUD backend (schema, handlers, routes, auth, entry point)
//! for one resource at a time.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{generate, generate_at, preview, preview_at};
pub use app::commands::preview::PreviewTarget;
pub use domain::{
    AppError, ArtifactKind, ArtifactReport, GenerationReport, GeneratorConfig, MountPolicy,
    ResourceDescriptor, TokenIssuance, WriteOutcome,
};
