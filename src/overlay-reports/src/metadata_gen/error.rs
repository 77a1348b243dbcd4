//! Metadata generator error types.

use thiserror::Error;

/// Errors that can occur while generating metadata boilerplate.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The plugin list file does not exist.
    #[error("Plugin list not found: {path}")]
    MissingInput { path: String },

    /// The plugin list could not be read.
    #[error(transparent)]
    List(#[from] crate::config::ConfigError),

    /// Rendering the boilerplate failed.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// A metadata file could not be written.
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
