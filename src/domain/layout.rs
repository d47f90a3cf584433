//! Path catalog for the generated project.
//!
//! Every path is relative to the project root. Business logic must use these
//! constants and [`super::ArtifactKind::target_path`] instead of ad-hoc joins.

/// Database connector configuration directory.
pub const CONFIG_DIR: &str = "config";

/// Request handler (controller) directory.
pub const CONTROLLERS_DIR: &str = "controllers";

/// Middleware placeholder directory. Created empty.
pub const MIDDLEWARE_DIR: &str = "middleware";

/// Persistence schema (model) directory.
pub const MODELS_DIR: &str = "models";

/// Route table directory.
pub const ROUTES_DIR: &str = "routes";

/// Process entry point file.
pub const ENTRY_POINT_FILE: &str = "index.js";

/// Optional generator configuration file.
pub const CONFIG_FILE: &str = "crudgen.toml";

/// File stem shared by the three auth bundle files.
pub const AUTH_STEM: &str = "auth";

/// Model registered by the auth bundle.
pub const AUTH_MODEL: &str = "User";

/// Top-level directories ensured before any artifact is rendered, in creation order.
pub const PROJECT_DIRS: [&str; 5] =
    [CONFIG_DIR, CONTROLLERS_DIR, MIDDLEWARE_DIR, MODELS_DIR, ROUTES_DIR];

/// URL prefix a resource's router is mounted under.
pub fn mount_prefix(resource: &str) -> String {
    format!("/api/{}", resource)
}

/// Path to a resource-scoped JavaScript module inside `dir`.
pub fn module_path(dir: &str, stem: &str) -> String {
    format!("{}/{}.js", dir, stem)
}
