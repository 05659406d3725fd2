//! Loading component specs and example configs from YAML.

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::ComponentSpec;

/// Loader for component spec and example files.
pub struct ComponentLoader;

impl ComponentLoader {
    /// Load a component spec from a YAML file.
    pub fn load_spec(path: impl AsRef<Path>) -> SpecResult<ComponentSpec> {
        let path = path.as_ref();
        debug!("Loading component spec from {:?}", path);
        Self::parse_spec(&Self::read(path)?)
    }

    /// Load an example config from a YAML file.
    pub fn load_example(path: impl AsRef<Path>) -> SpecResult<Value> {
        let path = path.as_ref();
        debug!("Loading example config from {:?}", path);
        Self::parse_example(&Self::read(path)?)
    }

    pub fn parse_spec(content: &str) -> SpecResult<ComponentSpec> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn parse_example(content: &str) -> SpecResult<Value> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn read(path: &Path) -> SpecResult<String> {
        fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
