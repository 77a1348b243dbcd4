//! Orchestrates a wiki report run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::enrichment::{EnrichedWorkspace, Enricher};
use crate::github::{GitHubClient, Lookup, PendingPullRequests, RepoRef};
use crate::report::WikiPage;
use crate::summary::RunSummary;
use crate::support::SupportLists;
use crate::templates::{wiki_page_file_name, TemplateRenderer};
use crate::workspaces::{discover_workspaces, Workspace};
use chrono::Utc;
use tracing::{info, warn};

/// Runs discovery, enrichment and rendering for one branch.
pub struct Runner {
    config: RunnerConfig,
    client: Option<GitHubClient>,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// No GitHub client is created in offline mode.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = if config.offline() {
            None
        } else {
            Some(GitHubClient::new(
                config.token(),
                config.settings().api_base_uri.as_deref(),
                config.settings().request_timeout(),
            )?)
        };

        Ok(Self {
            config,
            client,
            renderer: TemplateRenderer::new(),
        })
    }

    /// Executes the full flow and writes the report.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let config = &self.config;
        let mut summary = RunSummary::new(config.offline());

        info!(
            branch = config.branch(),
            repo = config.repo_name(),
            offline = config.offline(),
            "Generating workspace report"
        );

        let names = discover_workspaces(config.workspaces_path());
        if names.is_empty() {
            warn!("No workspaces found");
        }

        let settings = config.settings();
        let support = SupportLists::load(&settings.supported_list, &settings.community_list);
        let overlay_repo = RepoRef::from_full_name(config.repo_name());
        let pending = self.pending_pull_requests(overlay_repo.as_ref()).await;

        let enricher = Enricher::new(self.client.as_ref(), &support, &pending);
        let mut enriched: Vec<EnrichedWorkspace> = Vec::with_capacity(names.len());
        for name in &names {
            let workspace = Workspace::load(config.workspaces_path(), name);
            let result = enricher.enrich(workspace).await;
            summary.record_workspace(&result);
            enriched.push(result);
        }

        let page = WikiPage::build(config.branch(), overlay_repo.as_ref(), Utc::now(), &enriched);
        let markdown = page.render(&self.renderer)?;

        let output_path = config.output_dir().join(wiki_page_file_name(config.branch()));
        std::fs::write(&output_path, markdown).map_err(|e| RunnerError::WriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;

        info!(
            path = %output_path.display(),
            workspaces = summary.workspaces_processed,
            "Wiki page generated"
        );
        summary.output_path = Some(output_path);
        Ok(summary)
    }

    async fn pending_pull_requests(
        &self,
        overlay_repo: Option<&RepoRef>,
    ) -> Lookup<PendingPullRequests> {
        let Some(client) = self.client.as_ref() else {
            return Lookup::skipped("offline");
        };
        let Some(repo) = overlay_repo else {
            warn!(repo = self.config.repo_name(), "Invalid repository name, skipping pull request lookup");
            return Lookup::skipped("invalid repository name");
        };

        let pending = Lookup::from_result(
            client
                .pending_pull_requests(
                    repo,
                    self.config.branch(),
                    &self.config.settings().pending_pr_labels,
                )
                .await,
            "pending pull requests",
            self.config.repo_name(),
        );
        if let Some(index) = pending.value() {
            info!(count = index.len(), "Indexed pending pull requests");
        }
        pending
    }
}
