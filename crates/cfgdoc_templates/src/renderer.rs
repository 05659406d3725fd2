//! Template rendering for component documents.

use std::collections::HashMap;
use std::sync::LazyLock;

use liquid::model::{Object, Value};
use regex::Regex;
use tracing::debug;

use crate::context::ComponentContext;
use crate::error::{TemplateError, TemplateResult};

/// Matches `{{variable_name}}` placeholders.
static VARIABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").expect("placeholder pattern is valid")
});

/// Markdown layout of a component document.
pub const COMPONENT_TEMPLATE: &str = r#"---
title: {{ name }}
type: {{ type }}
---

<!--
     THIS FILE IS AUTOGENERATED!

     To make changes please edit the contents of:
     {{ source_hint }}
-->

{% if summary != "" -%}
{{ summary }}
{% endif %}
{% if common_config == advanced_config -%}
```yaml
{{ common_config -}}
```
{% else %}
import Tabs from '@theme/Tabs';

<Tabs defaultValue="common" values={[
  { label: 'Common', value: 'common', },
  { label: 'Advanced', value: 'advanced', },
]}>

import TabItem from '@theme/TabItem';

<TabItem value="common">

```yaml
{{ common_config -}}
```

</TabItem>
<TabItem value="advanced">

```yaml
{{ advanced_config -}}
```

</TabItem>
</Tabs>
{% endif -%}
{% if description != "" %}
{{ description }}
{% endif %}
{% if fields.size > 0 -%}
## Fields

{% endif -%}
{% for field in fields -%}
### `{{ field.name }}`

`{{ field.type }}` {{ field.description }}
{% if field.options.size > 0 %}
Options are: {% for option in field.options %}{% unless forloop.first %}, {% endunless %}`{{ option }}`{% endfor %}.
{% endif %}
{% if field.interpolation_note != "" -%}
{{ field.interpolation_note }}

{% endif -%}
{% if field.examples.size > 0 -%}
```yaml
# Examples

{% for example in field.examples %}{% unless forloop.first %}
{% endunless %}{{ example }}{% endfor -%}
```

{% endif -%}
{% endfor %}
"#;

/// Renders component contexts through a Liquid template.
pub struct TemplateRenderer {
    template: liquid::Template,
}

impl TemplateRenderer {
    /// Create a renderer for the built-in component layout.
    pub fn new() -> TemplateResult<Self> {
        Self::with_template(COMPONENT_TEMPLATE)
    }

    /// Create a renderer for a custom layout.
    pub fn with_template(source: &str) -> TemplateResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| TemplateError::Parse(e.to_string()))?;
        let template = parser
            .parse(source)
            .map_err(|e| TemplateError::Parse(e.to_string()))?;
        Ok(Self { template })
    }

    /// Render a component context into a document.
    pub fn render(&self, context: &ComponentContext) -> TemplateResult<String> {
        let globals = Self::to_globals(context)?;
        let rendered = self
            .template
            .render(&globals)
            .map_err(|e| TemplateError::Render(e.to_string()))?;
        debug!("Rendered {} ({} bytes)", context.name, rendered.len());
        Ok(rendered)
    }

    fn to_globals(context: &ComponentContext) -> TemplateResult<Object> {
        match liquid::model::to_value(context) {
            Ok(Value::Object(object)) => Ok(object),
            Ok(_) => Err(TemplateError::Render(
                "component context is not an object".to_string(),
            )),
            Err(e) => Err(TemplateError::Render(e.to_string())),
        }
    }

    /// Render content by replacing `{{name}}` placeholders. Unknown
    /// placeholders are left in place.
    pub fn render_content(content: &str, variables: &HashMap<String, String>) -> String {
        VARIABLE_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                variables
                    .get(var_name)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", var_name))
            })
            .to_string()
    }
}
