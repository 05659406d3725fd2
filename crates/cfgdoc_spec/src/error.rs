//! Error types for schema reconciliation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reconciling a field schema against an example.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("spec missing fields: {}", .paths.join(", "))]
    SchemaMismatch { paths: Vec<String> },

    #[error("unrecognised field '{0}'")]
    UnrecognizedField(String),

    #[error("unable to infer type of '{0}'")]
    TypeInference(String),

    #[error("field '{path}' declares children but its example value is not an object")]
    SplitStructuralMismatch { path: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid schema for component {component}: {}", .errors.join("; "))]
    InvalidSchema {
        component: String,
        errors: Vec<String>,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SpecError {
    /// Paths named by a schema mismatch, empty for every other kind.
    pub fn missing_paths(&self) -> &[String] {
        match self {
            SpecError::SchemaMismatch { paths } => paths,
            _ => &[],
        }
    }
}
