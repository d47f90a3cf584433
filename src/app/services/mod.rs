mod artifact_renderer;
mod write_guard;

pub use artifact_renderer::{ArtifactRenderer, auth_mount_statement};
pub use write_guard::WriteGuard;
