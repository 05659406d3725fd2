//! Render configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

pub const DEFAULT_MISSING_DESCRIPTION: &str = "Sorry! This field is missing documentation.";
pub const DEFAULT_INTERPOLATION_DOCS_URL: &str = "/docs/configuration/interpolation#functions";
pub const DEFAULT_SOURCE_HINT: &str = "components/{{type}}/{{name}}.yaml";

/// Options controlling how component documents are rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocConfig {
    /// Nest example configs under the component type
    pub nest: bool,
    /// Placeholder for fields without a description
    pub missing_description: String,
    /// Link target of interpolation notes
    pub interpolation_docs_url: String,
    /// Source location shown in the autogenerated banner.
    /// `{{name}}` and `{{type}}` are substituted.
    pub source_hint: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            nest: false,
            missing_description: DEFAULT_MISSING_DESCRIPTION.to_string(),
            interpolation_docs_url: DEFAULT_INTERPOLATION_DOCS_URL.to_string(),
            source_hint: DEFAULT_SOURCE_HINT.to_string(),
        }
    }
}

impl DocConfig {
    /// Load a config from a `.toml`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();
        debug!("Loading render config from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            other => Err(TemplateError::InvalidConfig {
                path: path.to_path_buf(),
                message: format!("unsupported extension {:?}", other.unwrap_or("")),
            }),
        }
    }

    pub fn with_nest(mut self, nest: bool) -> Self {
        self.nest = nest;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cfgdoc.toml");
        fs::write(&path, "nest = true\n").unwrap();

        let config = DocConfig::from_file(&path).unwrap();
        assert!(config.nest);
        assert_eq!(config.missing_description, DEFAULT_MISSING_DESCRIPTION);
    }

    #[test]
    fn test_yaml_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cfgdoc.yml");
        fs::write(&path, "missing_description: TBD\n").unwrap();

        let config = DocConfig::from_file(&path).unwrap();
        assert!(!config.nest);
        assert_eq!(config.missing_description, "TBD");
    }

    #[test]
    fn test_unknown_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cfgdoc.ini");
        fs::write(&path, "nest=1").unwrap();

        assert!(matches!(
            DocConfig::from_file(&path),
            Err(TemplateError::InvalidConfig { .. })
        ));
    }
}
