//! Dotted-path access over structured example values.
//!
//! Example configs are held as [`serde_yaml::Value`], which is the tagged
//! union of mappings, sequences and scalars every other module walks.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{SpecError, SpecResult};

/// Primitive kind of a structured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Tagged(tagged) => ValueKind::of(&tagged.value),
        }
    }
}

/// Round-trip any serializable value through YAML into plain structural data.
///
/// Scalar mapping keys are rewritten as strings, so `1: a` is keyed by `"1"`.
pub fn normalize<T: Serialize + ?Sized>(value: &T) -> SpecResult<Value> {
    let text = serde_yaml::to_string(value).map_err(|e| SpecError::Serialization(e.to_string()))?;
    let parsed = serde_yaml::from_str(&text).map_err(|e| SpecError::Serialization(e.to_string()))?;
    Ok(string_keys(parsed))
}

fn string_keys(value: Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| {
                    let key = key_to_string(&k).map(Value::String).unwrap_or(k);
                    (key, string_keys(v))
                })
                .collect(),
        ),
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(string_keys).collect()),
        Value::Tagged(mut tagged) => {
            tagged.value = string_keys(tagged.value);
            Value::Tagged(tagged)
        }
        other => other,
    }
}

/// Serialize a value as a YAML document.
pub fn to_yaml(value: &Value) -> SpecResult<String> {
    serde_yaml::to_string(value).map_err(|e| SpecError::Serialization(e.to_string()))
}

/// View a value as a mapping, looking through YAML tags.
pub fn as_mapping(value: &Value) -> Option<&Mapping> {
    match value {
        Value::Mapping(map) => Some(map),
        Value::Tagged(tagged) => as_mapping(&tagged.value),
        _ => None,
    }
}

/// Direct child of a mapping by key.
pub fn get_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    find_key(as_mapping(value)?, key)
}

/// Mapping entry whose key reads as `key`, matching `child_keys`.
fn find_key<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| key_to_string(k).as_deref() == Some(key))
            .map(|(_, v)| v)
    })
}

/// Keys of a mapping as strings, in document order. Non-mappings have none.
pub fn child_keys(value: &Value) -> Vec<String> {
    as_mapping(value)
        .map(|map| map.keys().filter_map(key_to_string).collect())
        .unwrap_or_default()
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => key_to_string(&tagged.value),
        _ => None,
    }
}

/// Resolve a dotted path such as `tls.client_certs.0.cert`.
///
/// Segments index mappings by key and sequences by position.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, segment| step(node, segment))
}

fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Mapping(map) => find_key(map, segment),
        Value::Sequence(seq) => segment.parse::<usize>().ok().and_then(|i| seq.get(i)),
        Value::Tagged(tagged) => step(&tagged.value, segment),
        _ => None,
    }
}

/// Whether a dotted path resolves to a value.
pub fn exists(root: &Value, path: &str) -> bool {
    lookup(root, path).is_some()
}

/// Wrap a value as `{key: value}`.
pub fn wrap(key: &str, value: Value) -> Value {
    let mut map = Mapping::new();
    map.insert(Value::String(key.to_string()), value);
    Value::Mapping(map)
}
