//! Report settings deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Optional settings loaded from a TOML file.
///
/// Every key has a default, so an empty file (or no file at all) yields
/// [`ReportSettings::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReportSettings {
    /// Labels a pull request must carry (any of) to count as a pending update.
    #[serde(default = "default_pending_pr_labels")]
    pub pending_pr_labels: Vec<String>,

    /// Allow-list of plugin paths with full support.
    #[serde(default = "default_supported_list")]
    pub supported_list: PathBuf,

    /// Allow-list of community-supported plugin paths.
    #[serde(default = "default_community_list")]
    pub community_list: PathBuf,

    /// Upper bound for a single GitHub API request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// GitHub API root, for GitHub Enterprise. `None` uses api.github.com.
    #[serde(default)]
    pub api_base_uri: Option<String>,
}

pub fn default_pending_pr_labels() -> Vec<String> {
    vec!["workspace_update".to_string(), "workspace_addition".to_string()]
}

pub fn default_supported_list() -> PathBuf {
    PathBuf::from("rhdh-supported-packages.txt")
}

pub fn default_community_list() -> PathBuf {
    PathBuf::from("rhdh-community-packages.txt")
}

pub fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            pending_pr_labels: default_pending_pr_labels(),
            supported_list: default_supported_list(),
            community_list: default_community_list(),
            request_timeout_secs: default_request_timeout_secs(),
            api_base_uri: None,
        }
    }
}

impl ReportSettings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading report settings");

        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::MalformedSettings {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates loaded settings.
    pub(crate) fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                path: path_str,
                message: "request-timeout-secs must be greater than zero".to_string(),
            });
        }

        if self.pending_pr_labels.is_empty() {
            return Err(ConfigError::InvalidSetting {
                path: path_str,
                message: "pending-pr-labels must list at least one label".to_string(),
            });
        }

        if let Some(uri) = &self.api_base_uri {
            if Url::parse(uri).is_err() {
                return Err(ConfigError::InvalidSetting {
                    path: path_str,
                    message: format!("api-base-uri '{uri}' is not a valid URL"),
                });
            }
        }

        if self.pending_pr_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::InvalidSetting {
                path: path_str,
                message: "pending-pr-labels must not contain empty labels".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
