//! Error types for document rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while rendering component documentation.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    Parse(String),

    #[error("Template rendering failed: {0}")]
    Render(String),

    #[error("Invalid render config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Spec(#[from] cfgdoc_spec::SpecError),
}
