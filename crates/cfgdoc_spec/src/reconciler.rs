//! Reconciliation of a field schema against an example config.
//!
//! The walk is depth-first and pre-order. Every key present in the example
//! at a level reached through the schema must be declared at that level;
//! declared fields absent from the example are not flagged here. Levels
//! reached through a field without children are opaque and never inspected.
//! Children of a deprecated field are flattened as deprecated too.

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::error::{SpecError, SpecResult};
use crate::inference::TypeInferencer;
use crate::models::{FieldSpec, FieldSpecs};
use crate::value;

/// A field declaration re-expressed under its fully qualified path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedField {
    /// Dotted path from the component root
    pub path: String,
    /// The declaration, without children
    pub field: FieldSpec,
    /// Declared type, else the kind of the example value at `path`
    pub label: Option<String>,
}

/// Outcome of walking a schema against an example.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// Every declared field in declaration order, parents before children
    pub fields: Vec<FlattenedField>,
    /// Example keys with no declaration at their level
    pub missing: Vec<String>,
}

impl Reconciliation {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn merge(&mut self, other: Reconciliation) {
        self.fields.extend(other.fields);
        self.missing.extend(other.missing);
    }

    /// Flattened fields, or a schema mismatch naming every offending path.
    pub fn into_fields(self) -> SpecResult<Vec<FlattenedField>> {
        if self.missing.is_empty() {
            Ok(self.fields)
        } else {
            Err(SpecError::SchemaMismatch { paths: self.missing })
        }
    }
}

/// Walks field schemas against example values.
pub struct TreeReconciler;

impl TreeReconciler {
    /// Walk `fields` against `example`, collecting flattened fields and undeclared keys.
    pub fn reconcile(fields: &FieldSpecs, example: &Value) -> Reconciliation {
        let result = Self::walk("", fields, Some(example), false);
        debug!(
            "Reconciled {} fields ({} undeclared keys)",
            result.fields.len(),
            result.missing.len()
        );
        result
    }

    /// Reconcile and fail on any undeclared key.
    pub fn check(fields: &FieldSpecs, example: &Value) -> SpecResult<Vec<FlattenedField>> {
        let result = Self::reconcile(fields, example);
        if !result.is_consistent() {
            warn!("Schema and example disagree: {:?}", result.missing);
        }
        result.into_fields()
    }

    fn walk(
        prefix: &str,
        fields: &FieldSpecs,
        node: Option<&Value>,
        deprecated: bool,
    ) -> Reconciliation {
        let mut unaccounted = node.map(value::child_keys).unwrap_or_default();
        let mut result = Reconciliation::default();

        for field in fields {
            unaccounted.retain(|key| key != &field.name);

            let path = format!("{}{}", prefix, field.name);
            let child = node.and_then(|n| value::get_key(n, &field.name));
            let mut leaf = field.leaf();
            leaf.deprecated |= deprecated;

            let label = if field.field_type.is_empty() {
                child.and_then(TypeInferencer::kind_name).map(str::to_string)
            } else {
                Some(TypeInferencer::normalize(&field.field_type))
            };
            let leaf_deprecated = leaf.deprecated;
            result.fields.push(FlattenedField {
                path: path.clone(),
                field: leaf,
                label,
            });

            if field.has_children() {
                let nested =
                    Self::walk(&format!("{}.", path), &field.children, child, leaf_deprecated);
                result.merge(nested);
            }
        }

        result
            .missing
            .extend(unaccounted.into_iter().map(|key| format!("{}{}", prefix, key)));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    fn schema() -> FieldSpecs {
        FieldSpecs::new(vec![
            FieldSpec::common("url", ""),
            FieldSpec::common("tls", "").with_children(vec![
                FieldSpec::common("enabled", ""),
                FieldSpec::advanced("skip_verify", ""),
            ]),
            FieldSpec::advanced("headers", ""),
        ])
    }

    #[test]
    fn test_matching_example_is_consistent() {
        let example = yaml(
            "url: x\ntls:\n  enabled: true\n  skip_verify: false\nheaders:\n  anything: goes\n",
        );
        let result = TreeReconciler::reconcile(&schema(), &example);

        assert!(result.is_consistent());
        let paths: Vec<_> = result.fields.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["url", "tls", "tls.enabled", "tls.skip_verify", "headers"]);
        assert!(result.fields.iter().all(|f| !f.field.has_children()));
    }

    #[test]
    fn test_extra_keys_are_qualified() {
        let example = yaml("url: x\nextra: 1\ntls:\n  enabled: true\n  bogus: 2\n");
        let result = TreeReconciler::reconcile(&schema(), &example);

        assert_eq!(result.missing, vec!["tls.bogus", "extra"]);
    }

    #[test]
    fn test_absent_declared_field_is_not_missing() {
        let example = yaml("url: x\n");
        let result = TreeReconciler::reconcile(&schema(), &example);
        assert!(result.is_consistent());
        assert_eq!(result.fields.len(), 5);
    }

    #[test]
    fn test_leaf_with_structured_value_is_opaque() {
        let example = yaml("headers:\n  a: 1\n  b:\n    c: 2\n");
        let result = TreeReconciler::reconcile(&schema(), &example);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_check_reports_mismatch() {
        let fields = FieldSpecs::new(vec![FieldSpec::common("name", "")]);
        let err = TreeReconciler::check(&fields, &yaml("name: x\nextra: 1\n")).unwrap_err();
        assert_eq!(err.missing_paths(), ["extra".to_string()]);
    }

    #[test]
    fn test_labels_per_field() {
        let fields = FieldSpecs::new(vec![
            FieldSpec::common("url", ""),
            FieldSpec::common("port", "").with_type("int"),
            FieldSpec::common("tls", "").with_children(vec![FieldSpec::common("enabled", "")]),
            FieldSpec::common("absent", ""),
        ]);
        let result = TreeReconciler::reconcile(&fields, &yaml("url: x\ntls:\n  enabled: true\n"));

        let labels: Vec<_> = result
            .fields
            .iter()
            .map(|f| (f.path.as_str(), f.label.as_deref()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("url", Some("string")),
                ("port", Some("number")),
                ("tls", Some("object")),
                ("tls.enabled", Some("bool")),
                ("absent", None),
            ]
        );
    }

    #[test]
    fn test_deprecated_parent_marks_children() {
        let fields = FieldSpecs::new(vec![
            FieldSpec::common("name", ""),
            FieldSpec::deprecated("old").with_children(vec![FieldSpec::common("x", "")]),
        ]);
        let result = TreeReconciler::reconcile(&fields, &yaml("name: a\nold:\n  x: 1\n"));

        assert!(result.is_consistent());
        let deprecated: Vec<_> = result
            .fields
            .iter()
            .filter(|f| f.field.deprecated)
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(deprecated, vec!["old", "old.x"]);
    }

    #[test]
    fn test_numeric_keys_are_declared() {
        let fields = FieldSpecs::new(vec![FieldSpec::common("1", "")]);
        let result = TreeReconciler::reconcile(&fields, &yaml("1: a\n"));
        assert!(result.is_consistent());
        assert_eq!(result.fields[0].label.as_deref(), Some("string"));
    }

    #[test]
    fn test_deprecated_names_are_declared() {
        let fields = FieldSpecs::new(vec![
            FieldSpec::common("name", ""),
            FieldSpec::deprecated("old_name"),
        ]);
        let result = TreeReconciler::reconcile(&fields, &yaml("name: x\nold_name: y\n"));
        assert!(result.is_consistent());
    }
}
