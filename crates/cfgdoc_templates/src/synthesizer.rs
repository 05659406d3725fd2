//! Assembles render contexts and documents for components.

use std::collections::HashMap;

use serde::Serialize;
use serde_yaml::Value;
use tracing::{debug, info};

use cfgdoc_spec::models::trim_leading_newline;
use cfgdoc_spec::{
    value, ComponentSpec, ConfigSplitter, FieldInterpolation, FlattenedField, SpecError,
    TreeReconciler, TypeInferencer,
};

use crate::config::DocConfig;
use crate::context::{ComponentContext, FieldContext};
use crate::error::TemplateResult;
use crate::renderer::TemplateRenderer;

/// Produces documentation for components from their schema and an example.
pub struct DocumentSynthesizer {
    config: DocConfig,
    renderer: TemplateRenderer,
}

impl DocumentSynthesizer {
    pub fn new(config: DocConfig) -> TemplateResult<Self> {
        Ok(Self {
            config,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Render the document for `spec` using `example` as its full config.
    pub fn render<T: Serialize + ?Sized>(
        &self,
        spec: &ComponentSpec,
        example: &T,
    ) -> TemplateResult<Vec<u8>> {
        let context = self.context(spec, example)?;
        let document = self.renderer.render(&context)?;
        info!(
            "Rendered {} {} ({} fields)",
            spec.category,
            spec.name,
            context.fields.len()
        );
        Ok(document.into_bytes())
    }

    /// Build the render context for `spec` without rendering it.
    pub fn context<T: Serialize + ?Sized>(
        &self,
        spec: &ComponentSpec,
        example: &T,
    ) -> TemplateResult<ComponentContext> {
        let full = value::normalize(example)?;

        let root = if self.config.nest { spec.category.as_str() } else { "" };
        let blocks = ConfigSplitter::example_blocks(spec, root, &full)?;

        let flattened = if spec.has_schema() {
            TreeReconciler::check(&spec.fields, &full)?
        } else {
            debug!("{} declares no fields, documenting raw example", spec.name);
            Vec::new()
        };

        let fields = flattened
            .iter()
            .filter(|f| !f.field.deprecated)
            .map(|f| self.field_context(f, &full))
            .collect::<TemplateResult<Vec<_>>>()?;

        Ok(ComponentContext {
            name: spec.name.clone(),
            category: spec.category.clone(),
            summary: spec.summary.clone(),
            description: trim_leading_newline(&spec.description).to_string(),
            source_hint: self.source_hint(spec),
            fields,
            common_config: blocks.common,
            advanced_config: blocks.advanced,
        })
    }

    fn field_context(&self, flat: &FlattenedField, full: &Value) -> TemplateResult<FieldContext> {
        let field = &flat.field;
        let Some(actual) = value::lookup(full, &flat.path) else {
            return Err(SpecError::UnrecognizedField(flat.path.clone()).into());
        };

        let field_type = TypeInferencer::infer(&flat.path, field, Some(actual))?;

        let examples = field
            .examples
            .iter()
            .map(|example| value::to_yaml(&value::wrap(&flat.path, example.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        let description = if field.description.is_empty() {
            self.config.missing_description.as_str()
        } else {
            trim_leading_newline(&field.description)
        };

        Ok(FieldContext {
            name: flat.path.clone(),
            field_type,
            description: description.to_string(),
            advanced: field.advanced,
            interpolation: field.interpolation,
            interpolation_note: self.interpolation_note(field.interpolation),
            examples,
            options: field.options.clone(),
        })
    }

    fn interpolation_note(&self, interpolation: FieldInterpolation) -> String {
        let url = &self.config.interpolation_docs_url;
        match interpolation {
            FieldInterpolation::None => String::new(),
            FieldInterpolation::BatchWide => format!(
                "This field supports [interpolation functions]({}) that are resolved batch wide.",
                url
            ),
            FieldInterpolation::Individual => {
                format!("This field supports [interpolation functions]({}).", url)
            }
        }
    }

    fn source_hint(&self, spec: &ComponentSpec) -> String {
        let vars = HashMap::from([
            ("name".to_string(), spec.name.clone()),
            ("type".to_string(), spec.category.clone()),
        ]);
        TemplateRenderer::render_content(&self.config.source_hint, &vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgdoc_spec::FieldSpec;

    fn synthesizer() -> DocumentSynthesizer {
        DocumentSynthesizer::new(DocConfig::default()).unwrap()
    }

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_level_context() {
        let spec = ComponentSpec::new("logger", "resource")
            .with_fields(vec![FieldSpec::common("level", "").with_examples(["debug"])]);

        let ctx = synthesizer().context(&spec, &yaml("level: debug\n")).unwrap();

        assert_eq!(ctx.fields.len(), 1);
        let level = &ctx.fields[0];
        assert_eq!(level.field_type, "string");
        assert_eq!(level.description, crate::config::DEFAULT_MISSING_DESCRIPTION);
        assert!(level.options.is_empty());
        assert!(level.interpolation_note.is_empty());
        assert_eq!(level.examples, vec!["level: debug\n"]);
        assert!(!ctx.has_tiers());
        assert_eq!(ctx.common_config, "logger:\n  level: debug\n");
    }

    #[test]
    fn test_descriptions_lose_leading_newline() {
        let spec = ComponentSpec::new("logger", "resource")
            .with_description("\nLong text.")
            .with_fields(vec![FieldSpec::common("level", "\nThe level.")]);

        let ctx = synthesizer().context(&spec, &yaml("level: info\n")).unwrap();
        assert_eq!(ctx.description, "Long text.");
        assert_eq!(ctx.fields[0].description, "The level.");
    }

    #[test]
    fn test_declared_field_absent_from_example() {
        let spec = ComponentSpec::new("logger", "resource").with_fields(vec![
            FieldSpec::common("level", "").with_examples(["debug"]),
            FieldSpec::common("format", "").with_examples(["json"]),
        ]);

        let err = synthesizer().context(&spec, &yaml("level: debug\n")).unwrap_err();
        assert!(err.to_string().contains("unrecognised field 'format'"));
    }

    #[test]
    fn test_custom_missing_description() {
        let config = DocConfig {
            missing_description: "TBD".to_string(),
            ..DocConfig::default()
        };
        let spec = ComponentSpec::new("logger", "resource")
            .with_fields(vec![FieldSpec::common("level", "")]);

        let ctx = DocumentSynthesizer::new(config)
            .unwrap()
            .context(&spec, &yaml("level: info\n"))
            .unwrap();
        assert_eq!(ctx.fields[0].description, "TBD");
    }

    #[test]
    fn test_numeric_field_names() {
        let spec = ComponentSpec::new("c", "input").with_fields(vec![FieldSpec::common("1", "n")]);

        let ctx = synthesizer().context(&spec, &yaml("1: a\n")).unwrap();
        assert_eq!(ctx.fields.len(), 1);
        assert_eq!(ctx.fields[0].name, "1");
        assert_eq!(ctx.fields[0].field_type, "string");
        assert!(ctx.common_config.contains("1': a\n") || ctx.common_config.contains("1: a\n"));
    }

    #[test]
    fn test_children_of_deprecated_field_are_hidden() {
        let spec = ComponentSpec::new("http", "output").with_fields(vec![
            FieldSpec::common("name", "Name."),
            FieldSpec::deprecated("old").with_children(vec![FieldSpec::common("x", "X.")]),
        ]);

        let ctx = synthesizer()
            .context(&spec, &yaml("name: a\nold:\n  x: 1\n"))
            .unwrap();
        let names: Vec<_> = ctx.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name"]);
        assert!(!ctx.advanced_config.contains("old"));
    }

    #[test]
    fn test_interpolation_notes() {
        let spec = ComponentSpec::new("http", "output").with_fields(vec![
            FieldSpec::common("url", "").supports_interpolation(false),
            FieldSpec::common("path", "").supports_interpolation(true),
        ]);

        let ctx = synthesizer()
            .context(&spec, &yaml("url: localhost\npath: /post\n"))
            .unwrap();
        assert!(!ctx.fields[0].interpolation_note.contains("batch wide"));
        assert!(ctx.fields[0].interpolation_note.contains(crate::config::DEFAULT_INTERPOLATION_DOCS_URL));
        assert!(ctx.fields[1].interpolation_note.contains("batch wide"));
    }

    #[test]
    fn test_nested_examples_and_source_hint() {
        let config = DocConfig::default().with_nest(true);
        let spec = ComponentSpec::new("stdout", "output");

        let ctx = DocumentSynthesizer::new(config)
            .unwrap()
            .context(&spec, &yaml("codec: lines\n"))
            .unwrap();
        assert_eq!(ctx.common_config, "output:\n  stdout:\n    codec: lines\n");
        assert_eq!(ctx.source_hint, "components/output/stdout.yaml");
        assert!(ctx.fields.is_empty());
    }
}
