//! Support diff error types.

use thiserror::Error;

/// Errors that can occur while producing the support comparison.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Rendering the document failed.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// The document could not be written.
    #[error("Failed to write comparison '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
