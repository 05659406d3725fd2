//! Display type inference for undeclared field types.

use serde_yaml::Value;
use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::FieldSpec;
use crate::value::ValueKind;

pub const TYPE_OBJECT: &str = "object";
pub const TYPE_ARRAY: &str = "array";
pub const TYPE_NUMBER: &str = "number";
pub const TYPE_STRING: &str = "string";
pub const TYPE_BOOL: &str = "bool";

/// Resolves the documented type of a field.
pub struct TypeInferencer;

impl TypeInferencer {
    /// Resolve the display type of `field` found at `path`.
    ///
    /// An explicit type wins, then the kind of the first declared example,
    /// then the kind of the value at `path` in the real example data.
    pub fn infer(path: &str, field: &FieldSpec, value_at_path: Option<&Value>) -> SpecResult<String> {
        if !field.field_type.is_empty() {
            return Ok(Self::normalize(&field.field_type));
        }

        let from_example = field.examples.first().and_then(Self::kind_name);
        let inferred = from_example.or_else(|| value_at_path.and_then(Self::kind_name));

        match inferred {
            Some(name) => {
                debug!("Inferred type of '{}' as {}", path, name);
                Ok(name.to_string())
            }
            None => Err(SpecError::TypeInference(path.to_string())),
        }
    }

    /// Documentation type of a value, `None` for nulls.
    pub fn kind_name(value: &Value) -> Option<&'static str> {
        match ValueKind::of(value) {
            ValueKind::Null => None,
            ValueKind::Bool => Some(TYPE_BOOL),
            ValueKind::Integer | ValueKind::Float => Some(TYPE_NUMBER),
            ValueKind::String => Some(TYPE_STRING),
            ValueKind::Sequence => Some(TYPE_ARRAY),
            ValueKind::Mapping => Some(TYPE_OBJECT),
        }
    }

    /// Fold raw type names into the documentation vocabulary.
    pub fn normalize(raw: &str) -> String {
        match raw {
            "map" | "mapping" | "struct" => TYPE_OBJECT.to_string(),
            "slice" | "sequence" | "list" => TYPE_ARRAY.to_string(),
            "float" | "float32" | "float64" | "int" | "int32" | "int64" | "integer" | "uint"
            | "uint64" => TYPE_NUMBER.to_string(),
            "boolean" => TYPE_BOOL.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_type_wins() {
        let field = FieldSpec::common("level", "").with_type("int64").with_examples(["debug"]);
        let ty = TypeInferencer::infer("level", &field, Some(&Value::Bool(true))).unwrap();
        assert_eq!(ty, "number");
    }

    #[test]
    fn test_first_example_before_data() {
        let field = FieldSpec::common("level", "").with_examples(["debug", "info"]);
        let ty = TypeInferencer::infer("level", &field, Some(&Value::from(1))).unwrap();
        assert_eq!(ty, "string");
    }

    #[test]
    fn test_falls_back_to_example_data() {
        let field = FieldSpec::common("rate", "");
        let ty = TypeInferencer::infer("rate", &field, Some(&Value::from(1.5))).unwrap();
        assert_eq!(ty, "number");

        let ty = TypeInferencer::infer("rate", &field, Some(&Value::from(64_i64))).unwrap();
        assert_eq!(ty, "number");
    }

    #[test]
    fn test_structured_kinds() {
        let field = FieldSpec::common("headers", "");
        let map: Value = serde_yaml::from_str("a: b").unwrap();
        let seq: Value = serde_yaml::from_str("[1, 2]").unwrap();
        assert_eq!(TypeInferencer::infer("headers", &field, Some(&map)).unwrap(), "object");
        assert_eq!(TypeInferencer::infer("headers", &field, Some(&seq)).unwrap(), "array");
    }

    #[test]
    fn test_no_source_fails() {
        let field = FieldSpec::common("mystery", "");
        let err = TypeInferencer::infer("a.mystery", &field, None).unwrap_err();
        assert!(matches!(err, SpecError::TypeInference(ref p) if p == "a.mystery"));

        let err = TypeInferencer::infer("a.mystery", &field, Some(&Value::Null)).unwrap_err();
        assert!(matches!(err, SpecError::TypeInference(_)));
    }

    #[test]
    fn test_null_example_uses_data() {
        let field = FieldSpec::common("opt", "").with_examples([Value::Null]);
        let ty = TypeInferencer::infer("opt", &field, Some(&Value::Bool(false))).unwrap();
        assert_eq!(ty, "bool");
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(TypeInferencer::normalize("map"), "object");
        assert_eq!(TypeInferencer::normalize("slice"), "array");
        assert_eq!(TypeInferencer::normalize("float64"), "number");
        assert_eq!(TypeInferencer::normalize("string"), "string");
        assert_eq!(TypeInferencer::normalize("duration"), "duration");
    }
}
