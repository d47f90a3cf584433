use std::fmt;

use super::ResourceName;
use super::layout::{
    AUTH_STEM, CONTROLLERS_DIR, ENTRY_POINT_FILE, MODELS_DIR, ROUTES_DIR, module_path,
};

/// One file of the fixed, field-independent auth bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthPart {
    /// User schema (username/email unique, optional phone/avatar).
    Schema,
    /// Register, login, delete-user, list-users.
    Handler,
    /// `/register`, `/login`, `/allUsers`, `/delete/:id`.
    Routes,
}

impl AuthPart {
    /// Commit order within the bundle.
    pub const ALL: [AuthPart; 3] = [AuthPart::Schema, AuthPart::Handler, AuthPart::Routes];
}

/// Fixed-content, resource-independent files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedFile {
    DatabaseConnector,
    Manifest,
    EnvTemplate,
    Dockerfile,
    DockerIgnore,
    Compose,
    GitIgnore,
}

impl FixedFile {
    /// Auxiliary files emitted after the entry point, in commit order.
    pub const AUXILIARY: [FixedFile; 6] = [
        FixedFile::Manifest,
        FixedFile::EnvTemplate,
        FixedFile::Dockerfile,
        FixedFile::DockerIgnore,
        FixedFile::Compose,
        FixedFile::GitIgnore,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            FixedFile::DatabaseConnector => "config/mongoose.js",
            FixedFile::Manifest => "package.json",
            FixedFile::EnvTemplate => ".env",
            FixedFile::Dockerfile => "Dockerfile",
            FixedFile::DockerIgnore => ".dockerignore",
            FixedFile::Compose => "docker-compose.yml",
            FixedFile::GitIgnore => ".gitignore",
        }
    }
}

/// Every kind of artifact the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Schema,
    Handler,
    RouteTable,
    AuthBundle(AuthPart),
    EntryPoint,
    FixedFile(FixedFile),
}

impl ArtifactKind {
    /// Project-relative target path.
    ///
    /// Only `Schema`, `Handler` and `RouteTable` depend on the resource name.
    pub fn target_path(&self, resource: &ResourceName) -> String {
        match self {
            ArtifactKind::Schema => module_path(MODELS_DIR, resource),
            ArtifactKind::Handler => module_path(CONTROLLERS_DIR, resource),
            ArtifactKind::RouteTable => module_path(ROUTES_DIR, resource),
            ArtifactKind::AuthBundle(part) => match part {
                AuthPart::Schema => module_path(MODELS_DIR, AUTH_STEM),
                AuthPart::Handler => module_path(CONTROLLERS_DIR, AUTH_STEM),
                AuthPart::Routes => module_path(ROUTES_DIR, AUTH_STEM),
            },
            ArtifactKind::EntryPoint => ENTRY_POINT_FILE.to_string(),
            ArtifactKind::FixedFile(file) => file.path().to_string(),
        }
    }

    /// Short human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Schema => "schema",
            ArtifactKind::Handler => "handler",
            ArtifactKind::RouteTable => "routes",
            ArtifactKind::AuthBundle(AuthPart::Schema) => "auth schema",
            ArtifactKind::AuthBundle(AuthPart::Handler) => "auth handler",
            ArtifactKind::AuthBundle(AuthPart::Routes) => "auth routes",
            ArtifactKind::EntryPoint => "entry point",
            ArtifactKind::FixedFile(FixedFile::DatabaseConnector) => "database connector",
            ArtifactKind::FixedFile(FixedFile::Manifest) => "manifest",
            ArtifactKind::FixedFile(FixedFile::EnvTemplate) => "environment template",
            ArtifactKind::FixedFile(FixedFile::Dockerfile) => "dockerfile",
            ArtifactKind::FixedFile(FixedFile::DockerIgnore) => "docker ignore",
            ArtifactKind::FixedFile(FixedFile::Compose) => "compose file",
            ArtifactKind::FixedFile(FixedFile::GitIgnore) => "git ignore",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
