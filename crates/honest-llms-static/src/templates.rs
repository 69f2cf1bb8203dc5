//! Template for the `llms.txt` index.

use minijinja::{context, Environment};

/// A document link in the index.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IndexEntry {
    /// Display label
    pub label: String,
    /// Absolute document URL
    pub url: String,
}

/// Values rendered into the index header.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    /// Framework name
    pub framework: String,
    /// One-line framework description
    pub description: String,
    /// URL of the full bundle
    pub full_url: String,
    /// URL of the tiny bundle
    pub tiny_url: String,
    /// One entry per document
    pub entries: Vec<IndexEntry>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the index template loaded.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("llms.txt", INDEX_TEMPLATE)
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render the `llms.txt` index.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("llms.txt")?;

        tmpl.render(context! {
            framework => &context.framework,
            description => &context.description,
            full_url => &context.full_url,
            tiny_url => &context.tiny_url,
            entries => &context.entries,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const INDEX_TEMPLATE: &str = r##"# {{ framework }}

> {{ description }}

## Docs

- [Full Docs]({{ full_url }}): The complete {{ framework }} documentation in a single file
- [Tiny Docs]({{ tiny_url }}): An abridged {{ framework }} documentation for smaller context windows

## Optional

{% for entry in entries %}- [{{ entry.label }}]({{ entry.url }})
{% endfor %}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context(entries: Vec<IndexEntry>) -> IndexContext {
        IndexContext {
            framework: "HonestJS".to_string(),
            description: "A web framework".to_string(),
            full_url: "https://example.com/llms-full.txt".to_string(),
            tiny_url: "https://example.com/llms-small.txt".to_string(),
            entries,
        }
    }

    #[test]
    fn renders_header_sections() {
        let engine = TemplateEngine::new();

        let text = engine.render_index(&context(vec![])).unwrap();

        assert_eq!(
            text,
            "# HonestJS\n\
             \n\
             > A web framework\n\
             \n\
             ## Docs\n\
             \n\
             - [Full Docs](https://example.com/llms-full.txt): The complete HonestJS documentation in a single file\n\
             - [Tiny Docs](https://example.com/llms-small.txt): An abridged HonestJS documentation for smaller context windows\n\
             \n\
             ## Optional\n\
             \n"
        );
    }

    #[test]
    fn renders_one_line_per_entry() {
        let engine = TemplateEngine::new();

        let text = engine
            .render_index(&context(vec![
                IndexEntry {
                    label: "Getting Started".to_string(),
                    url: "https://example.com/docs/getting-started".to_string(),
                },
                IndexEntry {
                    label: "Routing".to_string(),
                    url: "https://example.com/docs/concepts/routing".to_string(),
                },
            ]))
            .unwrap();

        assert!(text.ends_with(
            "## Optional\n\n\
             - [Getting Started](https://example.com/docs/getting-started)\n\
             - [Routing](https://example.com/docs/concepts/routing)\n"
        ));
    }

    #[test]
    fn does_not_escape_markdown() {
        let engine = crate::TemplateEngine::default();
        let mut ctx: crate::IndexContext = context(vec![]);
        ctx.description = "Routing & <DI> \"done\"".to_string();

        let text = engine.render_index(&ctx).unwrap();

        assert!(text.contains("> Routing & <DI> \"done\""));
    }
}
