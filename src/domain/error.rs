use std::io;

use thiserror::Error;

/// Library-wide error type for crudgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Resource name cannot be used as a type or module identifier.
    #[error(
        "Invalid resource name '{0}': must start with a letter, '_' or '$', contain only letters, digits, '_' or '$', and not be a reserved word or a name the generated project already uses"
    )]
    InvalidResourceName(String),

    /// Field name cannot be used as an attribute identifier.
    #[error(
        "Invalid field name '{0}': must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'"
    )]
    InvalidFieldName(String),

    /// A resource needs at least one field.
    #[error("Resource '{0}' must declare at least one field")]
    EmptyFieldSet(String),

    /// Other input validation failure.
    #[error("{0}")]
    Validation(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A template failed to load or render.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// The user aborted an interactive prompt.
    #[error("Cancelled")]
    Cancelled,

    /// Embedded asset or invariant problem.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for errors raised before any filesystem side effect.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidResourceName(_)
                | AppError::InvalidFieldName(_)
                | AppError::EmptyFieldSet(_)
                | AppError::Validation(_)
        )
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidResourceName(_)
            | AppError::InvalidFieldName(_)
            | AppError::EmptyFieldSet(_)
            | AppError::Validation(_)
            | AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::TemplateRender { .. } | AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
