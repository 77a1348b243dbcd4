//! Support-level comparison between two metadata trees.
//!
//! Every `metadata/*.yaml` file under the new tree is matched by file name
//! against a flat old tree. Plugins whose `spec.support` tag changed, and
//! plugins with no old counterpart, are emitted as two AsciiDoc tables.

mod error;

pub use error::DiffError;

use crate::templates::{TemplateRenderer, SUPPORT_DIFF_TEMPLATE};
use serde::Serialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Tag used when a file declares no support level.
pub const MISSING_TAG: &str = "N/A";

/// A plugin whose support level changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportChange {
    pub name: String,
    pub old: String,
    pub new: String,
}

/// A plugin with no counterpart in the old tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportAddition {
    pub name: String,
    pub new: String,
}

/// Result of comparing two trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupportComparison {
    pub changed: Vec<SupportChange>,
    pub added: Vec<SupportAddition>,
}

/// Inputs for a comparison run.
#[derive(Debug, Clone)]
pub struct SupportDiffConfig {
    /// Tree searched for `metadata/*.yaml`.
    pub new_root: PathBuf,
    /// Flat directory of previous metadata files.
    pub old_root: PathBuf,
    /// Release label of the old tree.
    pub old_label: String,
    /// Release label of the new tree.
    pub new_label: String,
    /// Where the AsciiDoc file is written.
    pub output_path: PathBuf,
}

#[derive(Serialize)]
struct DiffDocument<'a> {
    old_label: &'a str,
    new_label: &'a str,
    changed: &'a [SupportChange],
    added: &'a [SupportAddition],
}

/// Reads `spec.support` from a metadata file.
///
/// A missing tag yields [`MISSING_TAG`]; an unreadable or malformed file
/// yields an `ERROR: ...` tag so it still shows up in the comparison.
#[must_use]
pub fn extract_support_tag(path: &Path) -> String {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return format!("ERROR: {e}"),
    };

    match serde_yaml::from_str::<Value>(&content) {
        Ok(doc) => support_tag_of(&doc),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse metadata file");
            format!("ERROR: {e}")
        }
    }
}

fn support_tag_of(doc: &Value) -> String {
    match doc.get("spec").and_then(|spec| spec.get("support")) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => MISSING_TAG.to_string(),
    }
}

/// Finds `metadata/*.yaml` files under `root`, sorted by file name.
#[must_use]
pub fn find_metadata_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!(path = %root.display(), "Metadata tree not found");
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_metadata_file(path))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(count = files.len(), "Found metadata files");
    files
}

fn is_metadata_file(path: &Path) -> bool {
    let in_metadata_dir = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir == "metadata");
    in_metadata_dir && path.extension().is_some_and(|ext| ext == "yaml")
}

/// Compares every metadata file in `new_root` with its namesake in `old_root`.
#[must_use]
pub fn compare_support_levels(new_root: &Path, old_root: &Path) -> SupportComparison {
    let mut comparison = SupportComparison::default();

    for new_file in find_metadata_files(new_root) {
        let Some(file_name) = new_file.file_name() else {
            continue;
        };
        let name = new_file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let new = extract_support_tag(&new_file);

        let old_file = old_root.join(file_name);
        if !old_file.exists() {
            comparison.added.push(SupportAddition { name, new });
            continue;
        }

        let old = extract_support_tag(&old_file);
        if old != new {
            comparison.changed.push(SupportChange { name, old, new });
        }
    }

    comparison
}

/// Renders the comparison as AsciiDoc.
///
/// # Errors
///
/// Returns [`DiffError`] if rendering fails.
pub fn render_comparison(
    comparison: &SupportComparison,
    old_label: &str,
    new_label: &str,
    renderer: &TemplateRenderer,
) -> Result<String, DiffError> {
    let document = DiffDocument {
        old_label,
        new_label,
        changed: &comparison.changed,
        added: &comparison.added,
    };
    Ok(renderer.render_template(SUPPORT_DIFF_TEMPLATE, &document)?)
}

/// Compares both trees and writes the AsciiDoc document.
///
/// # Errors
///
/// Returns [`DiffError`] if rendering or writing fails.
pub fn write_support_diff(config: &SupportDiffConfig) -> Result<SupportComparison, DiffError> {
    info!(
        new_root = %config.new_root.display(),
        old_root = %config.old_root.display(),
        "Comparing support levels"
    );

    let comparison = compare_support_levels(&config.new_root, &config.old_root);
    let document = render_comparison(
        &comparison,
        &config.old_label,
        &config.new_label,
        &TemplateRenderer::new(),
    )?;

    std::fs::write(&config.output_path, document).map_err(|e| DiffError::WriteError {
        path: config.output_path.display().to_string(),
        source: e,
    })?;

    info!(
        path = %config.output_path.display(),
        changed = comparison.changed.len(),
        added = comparison.added.len(),
        "Support comparison written"
    );
    Ok(comparison)
}
