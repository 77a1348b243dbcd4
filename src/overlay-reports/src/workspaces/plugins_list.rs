//! Plugin list (`plugins-list.yaml`).

use serde_yaml::Value;
use std::path::Path;
use tracing::warn;

/// File name of the workspace plugin list.
pub const PLUGINS_LIST_FILE: &str = "plugins-list.yaml";

/// Reads the plugin paths listed for a workspace.
///
/// A missing, empty or malformed file yields an empty list; malformed
/// files are logged.
pub fn load_plugin_paths(workspace_dir: &Path) -> Vec<String> {
    let path = workspace_dir.join(PLUGINS_LIST_FILE);
    if !path.exists() {
        return Vec::new();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read plugin list");
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match serde_yaml::from_str::<Value>(&content) {
        Ok(value) => normalize_plugin_list(&value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse plugin list");
            Vec::new()
        }
    }
}

/// Normalizes the two accepted shapes to a list of paths.
///
/// A mapping contributes its keys (values are plugin options and are
/// ignored); a sequence contributes its items. Anything else is empty.
#[must_use]
pub fn normalize_plugin_list(value: &Value) -> Vec<String> {
    match value {
        Value::Mapping(mapping) => mapping.keys().filter_map(scalar_to_string).collect(),
        Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
