//! Remote enrichment of locally discovered workspaces.
//!
//! Each lookup is best-effort and recorded as a [`Lookup`]; the renderer
//! later decides what to show for skipped or unavailable data.

use crate::github::{GitHubClient, Lookup, PendingPullRequests, RepoRef};
use crate::support::{SupportLevel, SupportLists};
use crate::workspaces::Workspace;
use tracing::{debug, info, info_span, Instrument};

/// A declared plugin with its enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    /// Path as declared in `plugins-list.yaml`.
    pub path: String,

    /// `name@version` from the upstream manifest.
    pub display: Lookup<String>,

    /// Allow-list classification.
    pub support: SupportLevel,
}

impl PluginEntry {
    /// Display string, falling back to the declared path.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display.value().map_or(&self.path, String::as_str)
    }
}

/// A workspace together with everything fetched for it.
#[derive(Debug, Clone)]
pub struct EnrichedWorkspace {
    /// Local metadata.
    pub workspace: Workspace,

    /// Upstream repository, when the URL points at GitHub.
    pub repo: Option<RepoRef>,

    /// Pinned commit details.
    pub commit: Lookup<crate::github::CommitInfo>,

    /// Declared plugins.
    pub plugins: Vec<PluginEntry>,

    /// Framework version found upstream at the pinned commit.
    pub upstream_version: Lookup<String>,

    /// Open pull requests touching this workspace.
    pub pending_prs: Lookup<Vec<u64>>,
}

impl EnrichedWorkspace {
    /// Number of lookups that were attempted and failed.
    #[must_use]
    pub fn unavailable_lookups(&self) -> usize {
        let plugins = self
            .plugins
            .iter()
            .filter(|p| p.display.is_unavailable())
            .count();
        plugins
            + usize::from(self.commit.is_unavailable())
            + usize::from(self.upstream_version.is_unavailable())
            + usize::from(self.pending_prs.is_unavailable())
    }

    /// Returns pending pull request numbers, empty when unknown.
    #[must_use]
    pub fn pending_pr_numbers(&self) -> &[u64] {
        self.pending_prs.value().map_or(&[], Vec::as_slice)
    }
}

/// Shared inputs for enriching workspaces.
pub struct Enricher<'a> {
    client: Option<&'a GitHubClient>,
    support: &'a SupportLists,
    pending: &'a Lookup<PendingPullRequests>,
}

impl<'a> Enricher<'a> {
    /// Creates an enricher; `client` is `None` in offline mode.
    #[must_use]
    pub fn new(
        client: Option<&'a GitHubClient>,
        support: &'a SupportLists,
        pending: &'a Lookup<PendingPullRequests>,
    ) -> Self {
        Self {
            client,
            support,
            pending,
        }
    }

    /// Enriches one workspace. Never fails; failures are recorded per lookup.
    pub async fn enrich(&self, workspace: Workspace) -> EnrichedWorkspace {
        let span = info_span!("enrich", workspace = %workspace.name);

        async {
            info!("Enriching workspace");

            let repo = workspace.repo_url().and_then(RepoRef::parse);
            let pending_prs = self.pending_for(&workspace.name);

            let (commit, upstream_version, plugins) = match self.remote_target(&workspace, repo.as_ref()) {
                Ok((client, repo, reference)) => {
                    let commit = Lookup::from_result(
                        client.commit(repo, reference).await,
                        "commit",
                        &workspace.name,
                    );

                    let upstream_root = workspace.upstream_root();
                    let upstream_version = Lookup::from_result(
                        client.framework_version(repo, &upstream_root, reference).await,
                        "framework version",
                        &workspace.name,
                    );

                    let mut plugins = Vec::with_capacity(workspace.plugins.len());
                    for path in &workspace.plugins {
                        let display = Lookup::from_result(
                            client
                                .plugin_display_name(repo, &upstream_root, path, reference)
                                .await,
                            "plugin manifest",
                            path,
                        );
                        plugins.push(self.plugin_entry(&workspace.name, path, display));
                    }

                    (commit, upstream_version, plugins)
                }
                Err(reason) => {
                    debug!(reason = %reason, "Skipping remote lookups");
                    let plugins = workspace
                        .plugins
                        .iter()
                        .map(|path| {
                            self.plugin_entry(&workspace.name, path, Lookup::skipped(reason.clone()))
                        })
                        .collect();
                    (
                        Lookup::skipped(reason.clone()),
                        Lookup::skipped(reason),
                        plugins,
                    )
                }
            };

            EnrichedWorkspace {
                workspace,
                repo,
                commit,
                plugins,
                upstream_version,
                pending_prs,
            }
        }
        .instrument(span)
        .await
    }

    fn plugin_entry(&self, workspace: &str, path: &str, display: Lookup<String>) -> PluginEntry {
        let support = self.support.classify(workspace, path);
        debug!(plugin = path, support = support.as_str(), "Classified plugin");
        PluginEntry {
            path: path.to_string(),
            display,
            support,
        }
    }

    /// Resolves what remote lookups need, or why they are skipped.
    fn remote_target<'w>(
        &self,
        workspace: &'w Workspace,
        repo: Option<&'w RepoRef>,
    ) -> Result<(&'a GitHubClient, &'w RepoRef, &'w str), String> {
        let (Some(_), Some(reference)) = (workspace.repo_url(), workspace.commit_ref()) else {
            return Err("no repository or commit declared".to_string());
        };
        let Some(repo) = repo else {
            return Err("not a GitHub repository".to_string());
        };
        let Some(client) = self.client else {
            return Err("offline".to_string());
        };
        Ok((client, repo, reference))
    }

    fn pending_for(&self, name: &str) -> Lookup<Vec<u64>> {
        match self.pending {
            Lookup::Fetched(index) => Lookup::Fetched(index.for_workspace(name)),
            Lookup::Skipped { reason } => Lookup::skipped(reason.clone()),
            Lookup::Unavailable { reason } => Lookup::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}
