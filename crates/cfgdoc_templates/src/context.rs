//! Render context handed to the document template.

use serde::Serialize;

use cfgdoc_spec::FieldInterpolation;

use crate::error::TemplateResult;

/// Documentation entry for one flattened field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldContext {
    /// Dotted path of the field
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub description: String,
    pub advanced: bool,
    pub interpolation: FieldInterpolation,
    /// Prose note for interpolated fields, empty otherwise
    pub interpolation_note: String,
    /// Each example serialized as a YAML snippet
    pub examples: Vec<String>,
    pub options: Vec<String>,
}

/// Everything the component template needs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComponentContext {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub summary: String,
    pub description: String,
    pub source_hint: String,
    pub fields: Vec<FieldContext>,
    pub common_config: String,
    pub advanced_config: String,
}

impl ComponentContext {
    /// Whether the common and advanced examples differ.
    pub fn has_tiers(&self) -> bool {
        self.common_config != self.advanced_config
    }

    pub fn field(&self, name: &str) -> Option<&FieldContext> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn to_json(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
