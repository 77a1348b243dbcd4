//! Wiki page assembly.
//!
//! Turns enriched workspaces into table rows and renders the page through
//! the bundled template.

mod cells;

pub use cells::{
    backstage_cell, commit_date_cell, escape_cell, plugins_cell, source_cell, status_cell,
    workspace_cell, CELL_BREAK, NOT_AVAILABLE,
};

use crate::enrichment::EnrichedWorkspace;
use crate::github::RepoRef;
use crate::templates::{TemplateError, TemplateRenderer, WIKI_PAGE_TEMPLATE};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One table row, every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub status: String,
    pub workspace: String,
    pub source: String,
    pub commit_date: String,
    pub backstage: String,
    pub plugins: String,
}

impl ReportRow {
    /// Formats the row for one workspace.
    #[must_use]
    pub fn new(enriched: &EnrichedWorkspace, overlay_repo: Option<&RepoRef>, branch: &str) -> Self {
        let workspace = &enriched.workspace;
        Self {
            status: status_cell(enriched, overlay_repo),
            workspace: workspace_cell(&workspace.name, overlay_repo, branch),
            source: source_cell(enriched),
            commit_date: commit_date_cell(enriched),
            backstage: backstage_cell(
                workspace.declared_version.as_deref(),
                enriched.upstream_version.value().map(String::as_str),
            ),
            plugins: plugins_cell(&enriched.plugins),
        }
    }
}

/// The complete wiki page.
#[derive(Debug, Clone, Serialize)]
pub struct WikiPage {
    /// Branch the report describes.
    pub branch: String,

    /// Generation timestamp, formatted.
    pub generated_at: String,

    /// Number of workspaces (equals the number of rows).
    pub workspace_count: usize,

    /// Rows in directory order.
    pub rows: Vec<ReportRow>,
}

impl WikiPage {
    /// Builds the page, one row per workspace in the given order.
    #[must_use]
    pub fn build(
        branch: &str,
        overlay_repo: Option<&RepoRef>,
        generated_at: DateTime<Utc>,
        workspaces: &[EnrichedWorkspace],
    ) -> Self {
        let rows: Vec<ReportRow> = workspaces
            .iter()
            .map(|ws| ReportRow::new(ws, overlay_repo, branch))
            .collect();

        Self {
            branch: branch.to_string(),
            generated_at: generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            workspace_count: rows.len(),
            rows,
        }
    }

    /// Renders the page as Markdown.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering fails.
    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String, TemplateError> {
        renderer.render_template(WIKI_PAGE_TEMPLATE, self)
    }
}
