//! Runner error types.

/// Errors that can abort a report run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings and allow-list loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Page rendering errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// The report could not be written.
    #[error("Failed to write report '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
