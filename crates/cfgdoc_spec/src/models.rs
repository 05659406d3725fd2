//! Data models for component field schemas.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Whether a field supports interpolation functions, and at what granularity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldInterpolation {
    #[default]
    None,
    /// Resolved once for a whole batch
    BatchWide,
    /// Resolved for every individual item
    Individual,
}

impl FieldInterpolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldInterpolation::None => "none",
            FieldInterpolation::BatchWide => "batch_wide",
            FieldInterpolation::Individual => "individual",
        }
    }
}

impl std::fmt::Display for FieldInterpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single configuration field declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldSpec {
    /// Field name, unique among its siblings
    pub name: String,
    /// Explicit type tag; empty means the type is inferred
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub field_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub interpolation: FieldInterpolation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "FieldSpecs::is_empty")]
    pub children: FieldSpecs,
}

impl FieldSpec {
    /// Create a field shown in the common config example.
    pub fn common(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Create a field only shown in the advanced config example.
    pub fn advanced(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            advanced: true,
            ..Self::common(name, description)
        }
    }

    /// Create a deprecated field, hidden from both examples and the field docs.
    pub fn deprecated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deprecated: true,
            ..Self::default()
        }
    }

    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Append example values.
    pub fn with_examples<I, V>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    /// Set the allowed literal values.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_interpolation(mut self, interpolation: FieldInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Mark the field as supporting interpolation functions.
    pub fn supports_interpolation(self, batch_wide: bool) -> Self {
        self.with_interpolation(if batch_wide {
            FieldInterpolation::BatchWide
        } else {
            FieldInterpolation::Individual
        })
    }

    pub fn with_children(mut self, children: impl Into<FieldSpecs>) -> Self {
        self.children = children.into();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// A copy of this declaration without its nested children.
    pub fn leaf(&self) -> FieldSpec {
        FieldSpec {
            children: FieldSpecs::default(),
            ..self.clone()
        }
    }
}

/// An ordered sequence of sibling field declarations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct FieldSpecs(Vec<FieldSpec>);

impl FieldSpecs {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self(fields)
    }

    /// Find a declaration by name at this level.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.0.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for FieldSpecs {
    type Target = [FieldSpec];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<FieldSpec>> for FieldSpecs {
    fn from(fields: Vec<FieldSpec>) -> Self {
        Self(fields)
    }
}

impl FromIterator<FieldSpec> for FieldSpecs {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FieldSpecs {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Describes a configurable component and its field schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ComponentSpec {
    pub name: String,
    /// Category of the component (input, output, processor, ...)
    #[serde(rename = "type")]
    pub category: String,
    /// Short markdown summary
    #[serde(default)]
    pub summary: String,
    /// Long-form markdown description
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: FieldSpecs,
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_fields(mut self, fields: impl Into<FieldSpecs>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Components without declared fields are documented from the raw example.
    pub fn has_schema(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Strip a single leading newline from markdown prose.
pub fn trim_leading_newline(text: &str) -> &str {
    text.strip_prefix('\n').unwrap_or(text)
}
