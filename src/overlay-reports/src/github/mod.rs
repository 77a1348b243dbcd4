//! Read-only GitHub API access.
//!
//! Every request goes through [`GitHubClient`], which bounds it with the
//! configured per-request timeout. Callers turn results into [`Lookup`]s
//! so a failed request never aborts a run.

mod commits;
mod contents;
mod error;
mod lookup;
mod pulls;

pub use commits::{format_commit_date, short_sha, CommitInfo, SHORT_SHA_LEN};
pub use contents::join_repo_path;
pub use error::RemoteError;
pub use lookup::Lookup;
pub use pulls::{OpenPullRequest, PendingPullRequests};

use octocrab::Octocrab;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Host accepted for upstream repositories.
const GITHUB_HOST: &str = "github.com";

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Parses `https://github.com/<owner>/<repo>` (optionally with a trailing
    /// slash or `.git`). Other hosts and shapes yield `None`.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let parsed = Url::parse(url.trim()).ok()?;
        if parsed.host_str() != Some(GITHUB_HOST) {
            return None;
        }

        let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let name = segments.next()?.trim_end_matches(".git");
        if segments.next().is_some() || name.is_empty() {
            return None;
        }

        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Parses an `owner/name` identifier.
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Browser URL of the repository.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://{GITHUB_HOST}/{}/{}", self.owner, self.name)
    }
}

/// GitHub client with a per-request ceiling.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    timeout: Duration,
}

impl GitHubClient {
    /// Builds a client; unauthenticated when no token is given.
    ///
    /// `base_uri` points the client at another API root, such as a GitHub
    /// Enterprise instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_uri` is invalid or the underlying HTTP client
    /// cannot be built.
    pub fn new(
        token: Option<&str>,
        base_uri: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder();
        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri)?;
        }
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        Ok(Self {
            octocrab: builder.build()?,
            timeout,
        })
    }

    /// Awaits a request, failing with [`RemoteError::Timeout`] past the ceiling.
    async fn bounded<T, F>(&self, request: F) -> Result<T, RemoteError>
    where
        F: Future<Output = Result<T, octocrab::Error>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(RemoteError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }
}
