//! Workspace discovery and metadata extraction.
//!
//! A workspace is one subdirectory of the workspaces root. Everything here
//! is local and best-effort: unreadable or malformed files are logged and
//! treated as absent so that every workspace still gets a report row.

mod overlay_files;
mod plugins_list;
mod source;

pub use overlay_files::OverlayFileCounts;
pub use plugins_list::{load_plugin_paths, normalize_plugin_list, PLUGINS_LIST_FILE};
pub use source::{SourceDescriptor, SOURCE_FILE};

use crate::manifests::BackstageManifest;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the framework manifest.
pub const BACKSTAGE_FILE: &str = "backstage.json";

/// Local view of a single workspace.
#[derive(Debug, Clone, Serialize)]
pub struct Workspace {
    /// Directory name, unique within the root.
    pub name: String,

    /// Path to the workspace directory.
    #[serde(skip)]
    pub path: PathBuf,

    /// Parsed `source.json`, if present and valid.
    #[serde(skip)]
    pub source: Option<SourceDescriptor>,

    /// Plugin paths from `plugins-list.yaml`, empty without a descriptor.
    pub plugins: Vec<String>,

    /// Framework version declared by the overlay: its own `backstage.json`,
    /// else `repo-backstage-version` from `source.json`.
    pub declared_version: Option<String>,

    /// Counts of local overlay files.
    pub overlay_files: OverlayFileCounts,
}

impl Workspace {
    /// Reads all local metadata for a workspace.
    #[must_use]
    pub fn load(root: &Path, name: &str) -> Self {
        let path = root.join(name);
        debug!(workspace = name, path = %path.display(), "Loading workspace");

        let source = SourceDescriptor::load(&path);
        // Plugins are only reported for workspaces with a descriptor.
        let plugins = if source.is_some() {
            load_plugin_paths(&path)
        } else {
            Vec::new()
        };
        let declared_version = read_local_backstage_version(&path).or_else(|| {
            source
                .as_ref()
                .and_then(SourceDescriptor::declared_version)
                .map(str::to_string)
        });
        let overlay_files = OverlayFileCounts::scan(&path);

        Self {
            name: name.to_string(),
            path,
            source,
            plugins,
            declared_version,
            overlay_files,
        }
    }

    /// Returns the upstream repository URL, if known.
    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        self.source.as_ref().and_then(SourceDescriptor::repo_url)
    }

    /// Returns the pinned commit, if known.
    #[must_use]
    pub fn commit_ref(&self) -> Option<&str> {
        self.source.as_ref().and_then(SourceDescriptor::commit_ref)
    }

    /// Returns whether plugins live at the upstream repository root.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.source.as_ref().is_some_and(|s| s.repo_flat)
    }

    /// Directory in the upstream repository that holds this workspace.
    ///
    /// Empty for flat repositories, `workspaces/<name>` for monorepos.
    #[must_use]
    pub fn upstream_root(&self) -> String {
        if self.is_flat() {
            String::new()
        } else {
            format!("workspaces/{}", self.name)
        }
    }

    /// Returns true if plugins are listed but no metadata files exist.
    #[must_use]
    pub fn metadata_missing(&self) -> bool {
        !self.plugins.is_empty() && self.overlay_files.metadata == 0
    }
}

/// Lists workspace directory names under `root`, sorted.
///
/// Hidden entries and non-directories are skipped. A missing or unreadable
/// root is logged and yields an empty list.
pub fn discover_workspaces(root: &Path) -> Vec<String> {
    if !root.is_dir() {
        warn!(path = %root.display(), "Workspaces directory not found");
        return Vec::new();
    }

    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %root.display(), error = %e, "Failed to read workspaces directory");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();

    info!(count = names.len(), "Discovered workspaces");
    names
}

fn read_local_backstage_version(workspace_dir: &Path) -> Option<String> {
    let path = workspace_dir.join(BACKSTAGE_FILE);
    let content = std::fs::read_to_string(&path).ok()?;
    match BackstageManifest::parse_version(&content) {
        Ok(version) => version,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse framework manifest");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discovers_sorted_visible_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        fs::create_dir(temp.path().join(".hidden")).unwrap();
        fs::write(temp.path().join("README.md"), "").unwrap();

        assert_eq!(discover_workspaces(temp.path()), vec!["alpha", "zeta"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(discover_workspaces(&temp.path().join("workspaces")).is_empty());
    }

    #[test]
    fn workspace_without_descriptor_still_loads() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("bare")).unwrap();
        fs::write(temp.path().join("bare").join(PLUGINS_LIST_FILE), "- plugins/a\n").unwrap();

        let workspace = Workspace::load(temp.path(), "bare");

        assert_eq!(workspace.name, "bare");
        assert!(workspace.source.is_none());
        assert_eq!(workspace.repo_url(), None);
        assert!(workspace.plugins.is_empty());
        assert!(!workspace.metadata_missing());
        assert_eq!(workspace.upstream_root(), "workspaces/bare");
    }

    #[test]
    fn declared_version_falls_back_to_local_manifest() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("tekton");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join(SOURCE_FILE),
            r#"{"repo": "https://github.com/x/y", "repo-ref": "abc", "repo-flat": true}"#,
        )
        .unwrap();
        fs::write(dir.join(BACKSTAGE_FILE), r#"{"version": "1.36.0"}"#).unwrap();
        fs::write(dir.join(PLUGINS_LIST_FILE), "- plugins/tekton\n").unwrap();

        let workspace = Workspace::load(temp.path(), "tekton");

        assert_eq!(workspace.declared_version.as_deref(), Some("1.36.0"));
        assert!(workspace.is_flat());
        assert_eq!(workspace.upstream_root(), "");
        assert!(workspace.metadata_missing());
    }

    #[test]
    fn local_manifest_wins_over_descriptor_version() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("ws");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join(SOURCE_FILE),
            r#"{"repo-backstage-version": "1.39.0"}"#,
        )
        .unwrap();
        fs::write(dir.join(BACKSTAGE_FILE), r#"{"version": "1.36.0"}"#).unwrap();

        let workspace = Workspace::load(temp.path(), "ws");
        assert_eq!(workspace.declared_version.as_deref(), Some("1.36.0"));

        fs::remove_file(dir.join(BACKSTAGE_FILE)).unwrap();
        let workspace = Workspace::load(temp.path(), "ws");
        assert_eq!(workspace.declared_version.as_deref(), Some("1.39.0"));
    }
}
