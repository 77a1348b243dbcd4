//! Catalog metadata boilerplate for downstream plugins.
//!
//! Reads a list of plugin paths and writes one `metadata.yaml` per entry
//! into the overlay tree, overwriting existing files.

mod error;
mod rules;

pub use error::GeneratorError;
pub use rules::{collapse_path, plugin_name, plugin_type, sanitize_name, strip_trailing_dot};

use crate::config::{read_list_file, ConfigError};
use crate::templates::{TemplateRenderer, METADATA_TEMPLATE};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default plugin list file.
pub const DEFAULT_INPUT: &str = "downstream-plugins";

/// Default overlay repository web URL used in the annotations.
pub const DEFAULT_REPO_BASE_URL: &str =
    "https://github.com/redhat-developer/rhdh-plugin-export-overlays";

/// Name of the generated file.
pub const METADATA_FILE: &str = "metadata.yaml";

/// Template variables for one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    /// Plugin name with the `backstage-plugin-` marker removed.
    pub plugin_name: String,
    /// Overlay directory relative to the overlay root.
    pub final_path: String,
    /// Catalog component type.
    pub plugin_type: &'static str,
}

impl MetadataEntry {
    /// Derives the entry for one line of the plugin list.
    #[must_use]
    pub fn from_source_path(line: &str) -> Self {
        let source_path = strip_trailing_dot(line);
        let name = plugin_name(source_path);

        Self {
            plugin_name: sanitize_name(name),
            final_path: collapse_path(source_path),
            plugin_type: plugin_type(name),
        }
    }
}

#[derive(Serialize)]
struct MetadataDocument<'a> {
    #[serde(flatten)]
    entry: &'a MetadataEntry,
    repo_base_url: &'a str,
}

/// Inputs for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub overlay_root: PathBuf,
    pub repo_base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            overlay_root: PathBuf::from("workspaces"),
            repo_base_url: DEFAULT_REPO_BASE_URL.to_string(),
        }
    }
}

/// Renders the metadata document for one entry, ending in a single newline.
///
/// # Errors
///
/// Returns [`GeneratorError`] if rendering fails.
pub fn render_metadata(
    entry: &MetadataEntry,
    repo_base_url: &str,
    renderer: &TemplateRenderer,
) -> Result<String, GeneratorError> {
    let document = MetadataDocument {
        entry,
        repo_base_url,
    };
    let rendered = renderer.render_template(METADATA_TEMPLATE, &document)?;
    Ok(format!("{}\n", rendered.trim()))
}

/// Writes `metadata.yaml` for every entry in the plugin list.
///
/// Returns the paths written, in input order.
///
/// # Errors
///
/// Returns [`GeneratorError::MissingInput`] if the list does not exist, or
/// another [`GeneratorError`] if reading, rendering or writing fails.
pub fn generate_metadata(config: &GeneratorConfig) -> Result<Vec<PathBuf>, GeneratorError> {
    let lines = read_list_file(&config.input).map_err(|e| match e {
        ConfigError::NotFound { path } => GeneratorError::MissingInput { path },
        other => GeneratorError::List(other),
    })?;

    info!(input = %config.input.display(), entries = lines.len(), "Generating metadata");

    let renderer = TemplateRenderer::new();
    let mut written = Vec::with_capacity(lines.len());
    for line in &lines {
        let entry = MetadataEntry::from_source_path(line);
        let content = render_metadata(&entry, &config.repo_base_url, &renderer)?;
        let path = write_metadata(&config.overlay_root, &entry, &content)?;
        info!(path = %path.display(), "Generated");
        written.push(path);
    }

    Ok(written)
}

fn write_metadata(
    overlay_root: &Path,
    entry: &MetadataEntry,
    content: &str,
) -> Result<PathBuf, GeneratorError> {
    let dir = overlay_root.join(&entry.final_path);
    std::fs::create_dir_all(&dir).map_err(|e| GeneratorError::WriteError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(METADATA_FILE);
    std::fs::write(&path, content).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn entry_from_backstage_path() {
        let entry = MetadataEntry::from_source_path("backstage/plugins/kubernetes-backend/.");
        assert_eq!(
            entry,
            MetadataEntry {
                plugin_name: "kubernetes-backend".to_string(),
                final_path: "backstage/kubernetes-backend".to_string(),
                plugin_type: "backstage-backend-plugin",
            }
        );
    }

    #[test]
    fn renders_boilerplate() {
        let entry = MetadataEntry::from_source_path("3scale/plugins/backstage-plugin-3scale-backend");

        let content =
            render_metadata(&entry, DEFAULT_REPO_BASE_URL, &TemplateRenderer::new()).unwrap();

        assert!(content.starts_with("apiVersion: backstage.io/v1alpha1\n"));
        assert!(content.contains("  name: rhdh-plugin-3scale-backend\n"));
        assert!(content.contains("  title: '@redhat/backstage-plugin-3scale-backend'\n"));
        assert!(content.contains(
            "backstage.io/view-url: https://github.com/redhat-developer/rhdh-plugin-export-overlays/tree/main/workspaces/3scale\n"
        ));
        assert!(content.contains("/edit/main/workspaces/3scale/metadata.yaml\n"));
        assert!(content.contains("  type: backstage-backend-plugin\n"));
        assert!(content.ends_with("lifecycle: production\n"));
        assert!(!content.ends_with("\n\n"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = GeneratorConfig {
            input: temp.path().join("downstream-plugins"),
            overlay_root: temp.path().join("workspaces"),
            ..GeneratorConfig::default()
        };

        let result = generate_metadata(&config);

        assert!(matches!(result, Err(GeneratorError::MissingInput { .. })));
        assert!(!config.overlay_root.exists());
    }

    #[test]
    fn writes_and_overwrites_files() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("downstream-plugins");
        fs::write(
            &input,
            "# downstream\n\nbackstage/plugins/kubernetes/.\n3scale/plugins/3scale-backend\n",
        )
        .unwrap();
        let overlay_root = temp.path().join("workspaces");
        let existing = overlay_root.join("3scale");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join(METADATA_FILE), "stale").unwrap();

        let config = GeneratorConfig {
            input,
            overlay_root: overlay_root.clone(),
            ..GeneratorConfig::default()
        };
        let written = generate_metadata(&config).unwrap();

        assert_eq!(
            written,
            vec![
                overlay_root.join("backstage/kubernetes/metadata.yaml"),
                overlay_root.join("3scale/metadata.yaml"),
            ]
        );
        let overwritten = fs::read_to_string(existing.join(METADATA_FILE)).unwrap();
        assert!(overwritten.contains("rhdh-plugin-3scale-backend"));
    }
}
