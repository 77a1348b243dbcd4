//! Template renderer.

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (output is Markdown, AsciiDoc or YAML)
/// - Strict mode (catches missing variables)
/// - `support_style` helper for AsciiDoc support-level roles
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("support_style", Box::new(support_style));

    hbs
}

/// Wraps known support levels in an AsciiDoc color role.
///
/// Usage: `{{support_style level}}`
#[must_use]
pub fn style_support_level(level: &str) -> String {
    match level {
        "production" | "generally-available" => format!("[.green]#{level}#"),
        "tech-preview" => format!("[.blue]#{level}#"),
        other => other.to_string(),
    }
}

handlebars_helper!(support_style: |level: str| style_support_level(level));

/// Renders the bundled document templates.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders a template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is invalid or references a missing
    /// variable.
    pub fn render_template<T: Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
