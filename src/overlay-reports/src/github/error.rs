//! Remote lookup error types.

use thiserror::Error;

/// Errors that can occur while querying the hosting API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The request exceeded the per-request ceiling.
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The repository URL does not point at GitHub.
    #[error("Not a GitHub repository: {url}")]
    NotGitHub { url: String },

    /// The contents endpoint returned no decodable file.
    #[error("No file content returned for '{path}'")]
    MissingContent { path: String },

    /// A fetched manifest could not be used.
    #[error("Invalid manifest '{path}': {message}")]
    InvalidManifest { path: String, message: String },
}
