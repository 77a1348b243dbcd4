//! Workspace source descriptor (`source.json`).

use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::{debug, warn};

/// File name of the workspace source descriptor.
pub const SOURCE_FILE: &str = "source.json";

/// Upstream source of a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceDescriptor {
    /// Upstream repository URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: String,

    /// Pinned upstream commit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_ref: String,

    /// Framework version the overlay declares for this workspace.
    #[serde(default)]
    pub repo_backstage_version: Option<String>,

    /// Whether plugins live at the upstream repository root rather than
    /// under `workspaces/<name>`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_flat: bool,
}

impl SourceDescriptor {
    /// Reads `source.json` from a workspace directory.
    ///
    /// Returns `None` if the file is missing, unreadable or malformed; the
    /// latter two are logged.
    pub fn load(workspace_dir: &Path) -> Option<Self> {
        let path = workspace_dir.join(SOURCE_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "No source descriptor");
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read source descriptor");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse source descriptor");
                None
            }
        }
    }

    /// Returns the repository URL, if set.
    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        non_empty(&self.repo)
    }

    /// Returns the pinned commit, if set.
    #[must_use]
    pub fn commit_ref(&self) -> Option<&str> {
        non_empty(&self.repo_ref)
    }

    /// Returns the declared framework version, if set.
    #[must_use]
    pub fn declared_version(&self) -> Option<&str> {
        self.repo_backstage_version.as_deref().and_then(non_empty)
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn can_load_descriptor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SOURCE_FILE),
            r#"{
  "repo": "https://github.com/backstage/community-plugins",
  "repo-ref": "0123456789abcdef0123456789abcdef01234567",
  "repo-flat": false,
  "repo-backstage-version": "1.39.1"
}"#,
        )
        .unwrap();

        let descriptor = SourceDescriptor::load(temp.path()).unwrap();

        assert_eq!(
            descriptor.repo_url(),
            Some("https://github.com/backstage/community-plugins")
        );
        assert_eq!(
            descriptor.commit_ref(),
            Some("0123456789abcdef0123456789abcdef01234567")
        );
        assert!(!descriptor.repo_flat);
        assert_eq!(descriptor.declared_version(), Some("1.39.1"));
    }

    #[test]
    fn missing_fields_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SOURCE_FILE), r#"{"repo-flat": true}"#).unwrap();

        let descriptor = SourceDescriptor::load(temp.path()).unwrap();

        assert!(descriptor.repo_flat);
        assert_eq!(descriptor.repo_url(), None);
        assert_eq!(descriptor.commit_ref(), None);
        assert_eq!(descriptor.declared_version(), None);
    }

    #[test]
    fn null_fields_keep_the_rest() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SOURCE_FILE),
            r#"{"repo": "https://github.com/a/b", "repo-ref": "abcdef1234", "repo-backstage-version": null, "repo-flat": null}"#,
        )
        .unwrap();

        let descriptor = SourceDescriptor::load(temp.path()).unwrap();

        assert_eq!(descriptor.repo_url(), Some("https://github.com/a/b"));
        assert_eq!(descriptor.commit_ref(), Some("abcdef1234"));
        assert_eq!(descriptor.declared_version(), None);
        assert!(!descriptor.repo_flat);

        fs::write(temp.path().join(SOURCE_FILE), r#"{"repo": null, "repo-ref": null}"#).unwrap();
        let descriptor = SourceDescriptor::load(temp.path()).unwrap();
        assert_eq!(descriptor.repo_url(), None);
    }

    #[test]
    fn malformed_descriptor_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SOURCE_FILE), "{ not json").unwrap();

        assert_eq!(SourceDescriptor::load(temp.path()), None);
    }

    #[test]
    fn missing_descriptor_is_absent() {
        let temp = TempDir::new().unwrap();
        assert_eq!(SourceDescriptor::load(temp.path()), None);
    }
}
