//! Commit lookups.

use super::{GitHubClient, RemoteError, RepoRef};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

/// Number of characters in a short commit hash.
pub const SHORT_SHA_LEN: usize = 7;

/// Commit details shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated commit hash.
    pub short_sha: String,

    /// First line of the commit message.
    pub message: String,

    /// Author date, formatted for display.
    pub date: String,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    sha: String,
    commit: RawCommitDetail,
}

#[derive(Debug, Deserialize)]
struct RawCommitDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    author: Option<RawSignature>,
}

#[derive(Debug, Deserialize)]
struct RawSignature {
    #[serde(default)]
    date: Option<String>,
}

impl From<RawCommit> for CommitInfo {
    fn from(raw: RawCommit) -> Self {
        let message = raw
            .commit
            .message
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        let date = raw
            .commit
            .author
            .and_then(|a| a.date)
            .map_or_else(|| "N/A".to_string(), |d| format_commit_date(&d));

        Self {
            short_sha: short_sha(&raw.sha),
            message,
            date,
        }
    }
}

/// Formats an RFC 3339 timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_commit_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Truncates a commit hash to its short form.
#[must_use]
pub fn short_sha(sha: &str) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

impl GitHubClient {
    /// Fetches commit details for `reference` in `repo`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on API failure or timeout.
    pub async fn commit(&self, repo: &RepoRef, reference: &str) -> Result<CommitInfo, RemoteError> {
        debug!(repo = %repo.full_name(), reference, "Fetching commit");
        let route = format!("/repos/{}/{}/commits/{}", repo.owner, repo.name, reference);
        let raw: RawCommit = self.bounded(self.octocrab.get(route, None::<&()>)).await?;
        Ok(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_info_from_api_payload() {
        let raw: RawCommit = serde_json::from_str(
            r#"{
  "sha": "8f3c1a2b4d5e6f708192a3b4c5d6e7f8091a2b3c",
  "commit": {
    "message": "chore: bump tekton plugins\n\nSigned-off-by: someone",
    "author": {"name": "someone", "date": "2025-03-14T09:26:53Z"}
  }
}"#,
        )
        .unwrap();

        let info = CommitInfo::from(raw);

        assert_eq!(info.short_sha, "8f3c1a2");
        assert_eq!(info.message, "chore: bump tekton plugins");
        assert_eq!(info.date, "2025-03-14 09:26 UTC");
    }

    #[test]
    fn commit_without_author_date() {
        let raw: RawCommit =
            serde_json::from_str(r#"{"sha": "abc", "commit": {"message": ""}}"#).unwrap();

        let info = CommitInfo::from(raw);

        assert_eq!(info.short_sha, "abc");
        assert_eq!(info.message, "");
        assert_eq!(info.date, "N/A");
    }

    #[test]
    fn unparseable_date_is_kept() {
        assert_eq!(format_commit_date("yesterday"), "yesterday");
    }

    #[test]
    fn offset_dates_are_shown_in_utc() {
        assert_eq!(
            format_commit_date("2024-01-02T03:04:05+02:00"),
            "2024-01-02 01:04 UTC"
        );
    }
}
