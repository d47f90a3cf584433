//! Generator configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration for a generation run, loaded from `crudgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generated server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Entry-point merge behavior.
    #[serde(default)]
    pub entry_point: EntryPointConfig,
    /// Generated auth bundle behavior.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Values written into the environment template.
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.validate()?;
        self.environment.validate()?;
        Ok(())
    }
}

/// Settings baked into the generated entry point and container files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Fallback listen port when `PORT` is unset at runtime.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means permissive `cors()`.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port(), cors_origins: Vec::new() }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.port == 0 {
            return Err(AppError::config_error("server.port must be greater than 0"));
        }
        for origin in &self.cors_origins {
            if origin.trim().is_empty() {
                return Err(AppError::config_error("server.cors_origins must not contain empty entries"));
            }
            if origin.contains('"') || origin.contains('\\') {
                return Err(AppError::config_error(format!(
                    "server.cors_origins entry '{}' must not contain quotes or backslashes",
                    origin
                )));
            }
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    3002
}

/// How an existing entry point treats a mount for an already-mounted resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MountPolicy {
    /// Append the mount statement on every run, even if an identical line exists.
    #[default]
    AppendAlways,
    /// Leave the entry point untouched when the exact mount line is present.
    SkipExisting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryPointConfig {
    #[serde(default)]
    pub mount_policy: MountPolicy,
}

/// When the generated register handler signs its access token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenIssuance {
    /// Sign before the credential store confirms registration.
    #[default]
    BeforePersist,
    /// Persist credentials first, then sign from the stored user.
    AfterPersist,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default)]
    pub token_issuance: TokenIssuance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Datastore connection string placed in `.env`.
    #[serde(default = "default_database_uri")]
    pub database_uri: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { database_uri: default_database_uri() }
    }
}

impl EnvironmentConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database_uri.trim().is_empty() {
            return Err(AppError::config_error("environment.database_uri must not be empty"));
        }
        if self.database_uri.contains('\n') {
            return Err(AppError::config_error(
                "environment.database_uri must be a single line",
            ));
        }
        Ok(())
    }
}

fn default_database_uri() -> String {
    "mongodb://localhost:27017/your_database".to_string()
}
