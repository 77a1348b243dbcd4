//! Run summary types.

use crate::enrichment::EnrichedWorkspace;
use std::path::PathBuf;

/// Summary of a complete wiki report run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of workspaces written to the report.
    pub workspaces_processed: usize,

    /// Workspaces without a usable `source.json`.
    pub descriptors_missing: usize,

    /// Remote lookups that were attempted and failed.
    pub lookups_unavailable: usize,

    /// Workspaces with at least one pending pull request.
    pub workspaces_with_pending_prs: usize,

    /// Whether remote lookups were disabled.
    pub offline: bool,

    /// Where the report was written.
    pub output_path: Option<PathBuf>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(offline: bool) -> Self {
        Self {
            offline,
            ..Default::default()
        }
    }

    /// Updates the summary with one enriched workspace.
    pub fn record_workspace(&mut self, enriched: &EnrichedWorkspace) {
        self.workspaces_processed += 1;
        if enriched.workspace.source.is_none() {
            self.descriptors_missing += 1;
        }
        self.lookups_unavailable += enriched.unavailable_lookups();
        if !enriched.pending_pr_numbers().is_empty() {
            self.workspaces_with_pending_prs += 1;
        }
    }

    /// Returns true if every attempted remote lookup succeeded.
    #[must_use]
    pub fn all_lookups_succeeded(&self) -> bool {
        self.lookups_unavailable == 0
    }
}
