//! Outcome of a best-effort remote lookup.

use super::RemoteError;
use tracing::warn;

/// Result of one remote lookup, kept until rendering decides on a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The value was fetched.
    Fetched(T),

    /// The lookup was not attempted.
    Skipped { reason: String },

    /// The lookup was attempted and failed.
    Unavailable { reason: String },
}

impl<T> Lookup<T> {
    /// Converts a remote result, logging failures with the given context.
    pub fn from_result(result: Result<T, RemoteError>, what: &str, subject: &str) -> Self {
        match result {
            Ok(value) => Self::Fetched(value),
            Err(e) => {
                warn!(lookup = what, subject, error = %e, "Remote lookup failed");
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Creates a skipped lookup.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Returns the fetched value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the lookup was attempted and failed.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
