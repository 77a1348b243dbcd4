//! Pending pull requests against the overlay repository.

use super::{GitHubClient, RemoteError, RepoRef};
use octocrab::params;
use std::future::Future;
use tracing::{debug, info, warn};

/// Results per page for pull request listings.
const RESULTS_PER_PAGE: u8 = 100;

/// An open pull request reduced to what matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPullRequest {
    /// Pull request number.
    pub number: u64,

    /// Label names.
    pub labels: Vec<String>,

    /// Paths of changed files.
    pub files: Vec<String>,
}

/// Open pull requests that count as pending workspace updates.
#[derive(Debug, Clone, Default)]
pub struct PendingPullRequests {
    pulls: Vec<OpenPullRequest>,
}

impl PendingPullRequests {
    /// Keeps only pull requests carrying at least one of `labels`.
    #[must_use]
    pub fn new(pulls: Vec<OpenPullRequest>, labels: &[String]) -> Self {
        let pulls = pulls
            .into_iter()
            .filter(|pr| has_any_label(pr, labels))
            .collect();
        Self { pulls }
    }

    /// Numbers of pull requests touching `workspaces/<name>/`, ascending.
    #[must_use]
    pub fn for_workspace(&self, name: &str) -> Vec<u64> {
        let prefix = format!("workspaces/{name}/");
        let mut numbers: Vec<u64> = self
            .pulls
            .iter()
            .filter(|pr| pr.files.iter().any(|f| f.starts_with(&prefix)))
            .map(|pr| pr.number)
            .collect();
        numbers.sort_unstable();
        numbers.dedup();
        numbers
    }

    /// Number of pull requests retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pulls.len()
    }

    /// Returns true if no pull request was retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pulls.is_empty()
    }
}

fn has_any_label(pr: &OpenPullRequest, labels: &[String]) -> bool {
    pr.labels.iter().any(|l| labels.contains(l))
}

impl GitHubClient {
    /// Lists open pull requests targeting `base` that carry one of `labels`,
    /// together with their changed files.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on API failure or timeout.
    pub async fn pending_pull_requests(
        &self,
        repo: &RepoRef,
        base: &str,
        labels: &[String],
    ) -> Result<PendingPullRequests, RemoteError> {
        info!(repo = %repo.full_name(), base, "Listing open pull requests");

        let first_page = self
            .bounded(
                self.octocrab
                    .pulls(&repo.owner, &repo.name)
                    .list()
                    .state(params::State::Open)
                    .base(base)
                    .per_page(RESULTS_PER_PAGE)
                    .send(),
            )
            .await?;
        let pulls = self.bounded(self.octocrab.all_pages(first_page)).await?;

        let mut candidates = Vec::new();
        for pull in pulls {
            let labels_on_pull: Vec<String> = pull
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.name)
                .collect();
            let candidate = OpenPullRequest {
                number: pull.number,
                labels: labels_on_pull,
                files: Vec::new(),
            };
            if has_any_label(&candidate, labels) {
                candidates.push(candidate);
            }
        }

        attach_files(&mut candidates, |number| self.pull_request_files(repo, number)).await;

        info!(count = candidates.len(), "Found labelled pull requests");
        Ok(PendingPullRequests::new(candidates, labels))
    }

    async fn pull_request_files(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> Result<Vec<String>, RemoteError> {
        debug!(number, "Listing pull request files");
        let first_page = self
            .bounded(self.octocrab.pulls(&repo.owner, &repo.name).list_files(number))
            .await?;
        let files = self.bounded(self.octocrab.all_pages(first_page)).await?;
        Ok(files.into_iter().map(|f| f.filename).collect())
    }
}

/// Fills in changed files per pull request.
///
/// A pull request whose files cannot be listed keeps an empty file list and
/// so matches no workspace.
async fn attach_files<F, Fut>(candidates: &mut [OpenPullRequest], mut fetch: F)
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Vec<String>, RemoteError>>,
{
    for candidate in candidates.iter_mut() {
        match fetch(candidate.number).await {
            Ok(files) => candidate.files = files,
            Err(e) => {
                warn!(number = candidate.number, error = %e, "Failed to list pull request files, skipping");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["workspace_update".to_string(), "workspace_addition".to_string()]
    }

    fn pull(number: u64, labels: &[&str], files: &[&str]) -> OpenPullRequest {
        OpenPullRequest {
            number,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            files: files.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn filters_by_label() {
        let pending = PendingPullRequests::new(
            vec![
                pull(1, &["workspace_update"], &["workspaces/tekton/source.json"]),
                pull(2, &["docs"], &["workspaces/tekton/source.json"]),
                pull(3, &[], &["workspaces/tekton/source.json"]),
            ],
            &labels(),
        );

        assert_eq!(pending.len(), 1);
        assert_eq!(pending.for_workspace("tekton"), vec![1]);
    }

    #[test]
    fn matches_workspace_prefix_exactly() {
        let pending = PendingPullRequests::new(
            vec![
                pull(12, &["workspace_addition"], &["workspaces/foobar/source.json"]),
                pull(7, &["workspace_update"], &["workspaces/foo/plugins-list.yaml"]),
                pull(3, &["workspace_update"], &["README.md", "workspaces/foo/source.json"]),
            ],
            &labels(),
        );

        assert_eq!(pending.for_workspace("foo"), vec![3, 7]);
        assert_eq!(pending.for_workspace("foobar"), vec![12]);
        assert!(pending.for_workspace("bar").is_empty());
    }

    #[tokio::test]
    async fn file_listing_failure_skips_only_that_pull() {
        let mut candidates = vec![
            pull(5, &["workspace_update"], &[]),
            pull(6, &["workspace_update"], &[]),
        ];

        attach_files(&mut candidates, |number| async move {
            if number == 5 {
                Err(RemoteError::Timeout { timeout_secs: 1 })
            } else {
                Ok(vec!["workspaces/tekton/source.json".to_string()])
            }
        })
        .await;

        let pending = PendingPullRequests::new(candidates, &labels());
        assert_eq!(pending.len(), 2);
        assert_eq!(pending.for_workspace("tekton"), vec![6]);
    }

    #[test]
    fn empty_index() {
        let pending = PendingPullRequests::default();
        assert!(pending.is_empty());
        assert!(pending.for_workspace("any").is_empty());
    }
}
