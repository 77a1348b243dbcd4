//! Errors raised while loading report settings and list files.

use thiserror::Error;

/// Settings file or list file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Cannot read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The report settings are not valid TOML for [`crate::ReportSettings`].
    #[error("Malformed report settings in '{path}': {source}")]
    MalformedSettings {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A settings value was parsed but is not usable.
    #[error("Invalid report setting in '{path}': {message}")]
    InvalidSetting { path: String, message: String },

    /// The settings file or plugin list does not exist.
    #[error("File not found: {path}")]
    NotFound { path: String },
}
