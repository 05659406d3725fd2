//! Splits a full example config into common and advanced variants.

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::{ComponentSpec, FieldSpec, FieldSpecs};
use crate::value;

/// The two derived example variants of one component.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Every non-deprecated field
    pub advanced: Value,
    /// Only fields that are neither deprecated nor advanced
    pub common: Value,
}

/// Serialized example blocks ready for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleBlocks {
    pub advanced: String,
    pub common: String,
}

impl ExampleBlocks {
    /// Whether both tiers render identically.
    pub fn is_uniform(&self) -> bool {
        self.advanced == self.common
    }
}

/// Derives tiered example configs from a field schema.
pub struct ConfigSplitter;

impl ConfigSplitter {
    /// Split `full` into advanced and common variants.
    ///
    /// Without declared fields both variants are `full` unchanged.
    pub fn split(fields: &FieldSpecs, full: &Value) -> SpecResult<SplitConfig> {
        if fields.is_empty() {
            return Ok(SplitConfig {
                advanced: full.clone(),
                common: full.clone(),
            });
        }

        let advanced = Self::config_advanced(fields, full)?;
        let common = Self::config_common(fields, &advanced)?;
        Ok(SplitConfig { advanced, common })
    }

    /// Copy every non-deprecated declared field out of `conf`.
    pub fn config_advanced(fields: &FieldSpecs, conf: &Value) -> SpecResult<Value> {
        Self::extract("", fields, conf, &|f: &FieldSpec| !f.deprecated)
    }

    /// Copy every declared field that is neither deprecated nor advanced out of `conf`.
    pub fn config_common(fields: &FieldSpecs, conf: &Value) -> SpecResult<Value> {
        Self::extract("", fields, conf, &|f: &FieldSpec| {
            !f.deprecated && !f.advanced
        })
    }

    /// Render both example variants as YAML, wrapped under the component
    /// name and, when `root` is non-empty, under `root` as well.
    pub fn example_blocks(spec: &ComponentSpec, root: &str, full: &Value) -> SpecResult<ExampleBlocks> {
        let split = Self::split(&spec.fields, full)?;

        let wrap = |conf: Value| {
            let named = value::wrap(&spec.name, conf);
            if root.is_empty() {
                named
            } else {
                value::wrap(root, named)
            }
        };

        let advanced = value::to_yaml(&wrap(split.advanced))?;
        let common = if spec.has_schema() {
            value::to_yaml(&wrap(split.common))?
        } else {
            advanced.clone()
        };

        debug!(
            "Built example blocks for {} (uniform: {})",
            spec.name,
            advanced == common
        );
        Ok(ExampleBlocks { advanced, common })
    }

    fn extract(
        prefix: &str,
        fields: &FieldSpecs,
        conf: &Value,
        keep: &dyn Fn(&FieldSpec) -> bool,
    ) -> SpecResult<Value> {
        if value::as_mapping(conf).is_none() {
            let path = prefix.trim_end_matches('.');
            return Err(SpecError::SplitStructuralMismatch {
                path: if path.is_empty() { "<root>".to_string() } else { path.to_string() },
            });
        }

        let mut out = Mapping::new();
        for field in fields.iter().filter(|f| keep(f)) {
            let Some(current) = value::get_key(conf, &field.name) else {
                continue;
            };

            let copied = if field.has_children() {
                let nested = format!("{}{}.", prefix, field.name);
                Self::extract(&nested, &field.children, current, keep)?
            } else {
                current.clone()
            };
            out.insert(Value::String(field.name.clone()), copied);
        }

        Ok(Value::Mapping(out))
    }
}
