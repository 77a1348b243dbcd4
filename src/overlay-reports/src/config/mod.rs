//! Settings and allow-list loading.
//!
//! Settings come from an optional TOML file; the two allow-lists are flat
//! text files with one plugin path per line.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    default_community_list, default_pending_pr_labels, default_request_timeout_secs,
    default_supported_list, ReportSettings,
};

use std::path::Path;
use tracing::{debug, warn};

/// Reads a flat list file, one entry per line.
///
/// Blank lines and lines starting with `#` are ignored; surrounding
/// whitespace is trimmed.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist and
/// [`ConfigError::Unreadable`] if it cannot be read.
pub fn read_list_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.display().to_string(),
        source: e,
    })?;

    let entries: Vec<String> = parse_list(&content);
    debug!(path = %path.display(), count = entries.len(), "Read list file");
    Ok(entries)
}

/// Like [`read_list_file`], but a missing or unreadable file yields an empty list.
pub fn read_list_file_or_empty(path: &Path) -> Vec<String> {
    match read_list_file(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "List file unavailable, treating as empty");
            Vec::new()
        }
    }
}

fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
