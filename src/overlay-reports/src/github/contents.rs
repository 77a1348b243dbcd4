//! File content lookups and the manifests derived from them.

use super::{GitHubClient, RemoteError, RepoRef};
use crate::manifests::{BackstageManifest, PackageManifest};
use tracing::debug;

/// Joins repository-relative path parts, ignoring empty parts and stray slashes.
#[must_use]
pub fn join_repo_path(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .map(|p| p.strip_prefix("./").unwrap_or(p))
        .filter(|p| !p.is_empty() && *p != ".")
        .collect::<Vec<_>>()
        .join("/")
}

impl GitHubClient {
    /// Fetches the decoded content of a file at `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on API failure, timeout, or when the path is
    /// not a single file.
    pub async fn file_content(
        &self,
        repo: &RepoRef,
        path: &str,
        reference: &str,
    ) -> Result<String, RemoteError> {
        debug!(repo = %repo.full_name(), path, reference, "Fetching file content");
        let items = self
            .bounded(
                self.octocrab
                    .repos(&repo.owner, &repo.name)
                    .get_content()
                    .path(path)
                    .r#ref(reference)
                    .send(),
            )
            .await?;

        items
            .items
            .into_iter()
            .next()
            .and_then(|item| item.decoded_content())
            .ok_or_else(|| RemoteError::MissingContent {
                path: path.to_string(),
            })
    }

    /// Fetches `<root>/<plugin>/package.json` and returns `name@version`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the manifest cannot be fetched or lacks a
    /// name or version.
    pub async fn plugin_display_name(
        &self,
        repo: &RepoRef,
        upstream_root: &str,
        plugin_path: &str,
        reference: &str,
    ) -> Result<String, RemoteError> {
        let path = join_repo_path(&[upstream_root, plugin_path, "package.json"]);
        let content = self.file_content(repo, &path, reference).await?;

        let manifest: PackageManifest =
            serde_json::from_str(&content).map_err(|e| RemoteError::InvalidManifest {
                path: path.clone(),
                message: e.to_string(),
            })?;

        manifest
            .display_name()
            .ok_or_else(|| RemoteError::InvalidManifest {
                path,
                message: "missing name or version".to_string(),
            })
    }

    /// Fetches `<root>/backstage.json` and returns its framework version.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the manifest cannot be fetched or has no
    /// version.
    pub async fn framework_version(
        &self,
        repo: &RepoRef,
        upstream_root: &str,
        reference: &str,
    ) -> Result<String, RemoteError> {
        let path = join_repo_path(&[upstream_root, "backstage.json"]);
        let content = self.file_content(repo, &path, reference).await?;

        BackstageManifest::parse_version(&content)
            .map_err(|e| RemoteError::InvalidManifest {
                path: path.clone(),
                message: e.to_string(),
            })?
            .ok_or_else(|| RemoteError::InvalidManifest {
                path,
                message: "missing version".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths() {
        assert_eq!(
            join_repo_path(&["workspaces/tekton", "plugins/tekton", "package.json"]),
            "workspaces/tekton/plugins/tekton/package.json"
        );
        assert_eq!(join_repo_path(&["", "backstage.json"]), "backstage.json");
        assert_eq!(
            join_repo_path(&["", "./plugins/acr/", "package.json"]),
            "plugins/acr/package.json"
        );
        assert_eq!(join_repo_path(&["", ".", "backstage.json"]), "backstage.json");
    }
}
