//! # cfgdoc_spec
//!
//! Field schemas for configurable components, and the reconciliation of
//! those schemas against concrete example configs.
//!
//! ## Features
//!
//! - **Field Schema**: declarative, nested field declarations per component
//! - **Reconciliation**: every example key must be declared at its level
//! - **Splitting**: derive common and advanced example configs
//! - **Type Inference**: document undeclared types from examples
//! - **Linting**: catch malformed schemas before rendering
//!
//! ## Example
//!
//! ```rust
//! use cfgdoc_spec::{ConfigSplitter, FieldSpec, FieldSpecs, TreeReconciler};
//!
//! let fields = FieldSpecs::new(vec![
//!     FieldSpec::common("timeout", "How long to wait"),
//!     FieldSpec::advanced("retries", "How many attempts"),
//! ]);
//! let example: serde_yaml::Value = serde_yaml::from_str("timeout: 5s\nretries: 3\n").unwrap();
//!
//! let flattened = TreeReconciler::check(&fields, &example).unwrap();
//! assert_eq!(flattened.len(), 2);
//!
//! let split = ConfigSplitter::split(&fields, &example).unwrap();
//! assert!(cfgdoc_spec::value::get_key(&split.common, "retries").is_none());
//! ```

pub mod error;
pub mod inference;
pub mod linter;
pub mod loader;
pub mod models;
pub mod reconciler;
pub mod splitter;
pub mod value;

pub use error::{SpecError, SpecResult};
pub use inference::TypeInferencer;
pub use linter::{LintIssue, LintReport, SchemaLinter};
pub use loader::ComponentLoader;
pub use models::*;
pub use reconciler::{FlattenedField, Reconciliation, TreeReconciler};
pub use splitter::{ConfigSplitter, ExampleBlocks, SplitConfig};
pub use value::ValueKind;
