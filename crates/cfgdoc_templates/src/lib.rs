//! # cfgdoc_templates
//!
//! Documentation rendering for configurable components.
//!
//! A [`DocumentSynthesizer`] takes a component's field schema and a full
//! example config, reconciles the two, and renders a Markdown document with:
//!
//! - Common and advanced example configs
//! - One section per documented field (type, description, options,
//!   interpolation support, examples)
//!
//! ## Example
//!
//! ```rust
//! use cfgdoc_spec::{ComponentSpec, FieldSpec};
//! use cfgdoc_templates::{DocConfig, DocumentSynthesizer};
//!
//! let spec = ComponentSpec::new("logger", "resource")
//!     .with_summary("Configures the logger.")
//!     .with_fields(vec![FieldSpec::common("level", "The log level.").with_examples(["debug"])]);
//! let example: serde_yaml::Value = serde_yaml::from_str("level: info").unwrap();
//!
//! let synthesizer = DocumentSynthesizer::new(DocConfig::default()).unwrap();
//! let document = synthesizer.render(&spec, &example).unwrap();
//! assert!(String::from_utf8(document).unwrap().contains("### `level`"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod renderer;
pub mod synthesizer;

pub use config::DocConfig;
pub use context::{ComponentContext, FieldContext};
pub use error::{TemplateError, TemplateResult};
pub use renderer::{TemplateRenderer, COMPONENT_TEMPLATE};
pub use synthesizer::DocumentSynthesizer;
