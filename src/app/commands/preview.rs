//! Preview command: render one artifact without touching the project.

use std::fmt;

use crate::app::services::ArtifactRenderer;
use crate::domain::{AppError, ArtifactKind, AuthPart, ResourceDescriptor, mount_statement};

/// What `preview` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTarget {
    Artifact(ArtifactKind),
    /// The single mount line that would be appended to an existing entry point.
    Mount,
}

impl PreviewTarget {
    pub const NAMES: [&'static str; 8] = [
        "schema",
        "handler",
        "routes",
        "auth-schema",
        "auth-handler",
        "auth-routes",
        "entry-point",
        "mount",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let target = match name {
            "schema" => PreviewTarget::Artifact(ArtifactKind::Schema),
            "handler" => PreviewTarget::Artifact(ArtifactKind::Handler),
            "routes" => PreviewTarget::Artifact(ArtifactKind::RouteTable),
            "auth-schema" => PreviewTarget::Artifact(ArtifactKind::AuthBundle(AuthPart::Schema)),
            "auth-handler" => PreviewTarget::Artifact(ArtifactKind::AuthBundle(AuthPart::Handler)),
            "auth-routes" => PreviewTarget::Artifact(ArtifactKind::AuthBundle(AuthPart::Routes)),
            "entry-point" => PreviewTarget::Artifact(ArtifactKind::EntryPoint),
            "mount" => PreviewTarget::Mount,
            _ => return None,
        };
        Some(target)
    }

    pub fn parse(name: &str) -> Result<Self, AppError> {
        Self::from_name(name.trim()).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown artifact '{}'. Expected one of: {}",
                name,
                Self::NAMES.join(", ")
            ))
        })
    }
}

impl fmt::Display for PreviewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewTarget::Artifact(kind) => write!(f, "{}", kind),
            PreviewTarget::Mount => write!(f, "mount"),
        }
    }
}

/// Render the text `target` would have for `descriptor`.
pub fn execute(
    renderer: &ArtifactRenderer,
    target: PreviewTarget,
    descriptor: &ResourceDescriptor,
) -> Result<String, AppError> {
    match target {
        PreviewTarget::Artifact(kind) => renderer.render(kind, descriptor),
        PreviewTarget::Mount => Ok(format!("{}\n", mount_statement(descriptor.name()))),
    }
}
