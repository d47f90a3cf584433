use crate::app::services::ArtifactRenderer;
use crate::domain::GeneratorConfig;
use crate::ports::ProjectFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem> {
    filesystem: F,
    renderer: ArtifactRenderer,
}

impl<F: ProjectFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F, renderer: ArtifactRenderer) -> Self {
        Self { filesystem, renderer }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the artifact renderer.
    pub fn renderer(&self) -> &ArtifactRenderer {
        &self.renderer
    }

    /// Configuration the renderer was built with.
    pub fn config(&self) -> &GeneratorConfig {
        self.renderer.config()
    }
}
