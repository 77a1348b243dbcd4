//! Document rendering using Handlebars.
//!
//! The bundled templates lay out the generated documents; all cell content
//! is computed in Rust before rendering.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, style_support_level, TemplateRenderer};

/// Markdown wiki page listing every workspace.
pub const WIKI_PAGE_TEMPLATE: &str = include_str!("../../templates/wiki-page.md.hbs");

/// AsciiDoc support-level comparison.
pub const SUPPORT_DIFF_TEMPLATE: &str = include_str!("../../templates/support-diff.adoc.hbs");

/// Catalog `metadata.yaml` boilerplate.
pub const METADATA_TEMPLATE: &str = include_str!("../../templates/metadata.yaml.hbs");

/// Generates the wiki page file name for a branch.
///
/// Format: "{branch with '/' replaced by '-'}.md"
#[must_use]
pub fn wiki_page_file_name(branch: &str) -> String {
    format!("{}.md", branch.replace('/', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_sanitizes_slashes() {
        assert_eq!(wiki_page_file_name("main"), "main.md");
        assert_eq!(wiki_page_file_name("release-1.9/x"), "release-1.9-x.md");
    }

    #[test]
    fn bundled_templates_compile() {
        for template in [WIKI_PAGE_TEMPLATE, SUPPORT_DIFF_TEMPLATE, METADATA_TEMPLATE] {
            assert!(handlebars::Template::compile(template).is_ok());
        }
    }
}
