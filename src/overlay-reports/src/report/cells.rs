//! Table cell formatting for the wiki page.

use crate::enrichment::{EnrichedWorkspace, PluginEntry};
use crate::github::{short_sha, RepoRef};

/// Separator for stacked values inside one table cell.
pub const CELL_BREAK: &str = "<br>";

/// Placeholder for unknown values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Escapes text so it cannot break the table layout.
#[must_use]
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Structure icon plus one glyph per applicable overlay condition, the
/// overlay file counts (metadata/plugins/patches/tests) and pending PRs.
#[must_use]
pub fn status_cell(enriched: &EnrichedWorkspace, overlay_repo: Option<&RepoRef>) -> String {
    let workspace = &enriched.workspace;
    let mut glyphs = vec![if workspace.is_flat() { "📦" } else { "🏗️" }];

    if workspace.overlay_files.patches > 0 {
        glyphs.push("🩹");
    }
    if workspace.overlay_files.plugins > 0 {
        glyphs.push("🔌");
    }
    if workspace.metadata_missing() {
        glyphs.push("⚠️");
    }

    let mut cell = glyphs.join(" ");

    let files = workspace.overlay_files;
    if files.any() {
        cell.push_str(CELL_BREAK);
        cell.push_str(&format!(
            "📄 {}/{}/{}/{}",
            files.metadata, files.plugins, files.patches, files.tests
        ));
    }

    let pending = enriched.pending_pr_numbers();
    if !pending.is_empty() {
        let links: Vec<String> = pending
            .iter()
            .map(|number| pull_request_link(*number, overlay_repo))
            .collect();
        cell.push_str(CELL_BREAK);
        cell.push_str("🔄 ");
        cell.push_str(&links.join(", "));
    }

    cell
}

fn pull_request_link(number: u64, overlay_repo: Option<&RepoRef>) -> String {
    match overlay_repo {
        Some(repo) => format!("[#{number}]({}/pull/{number})", repo.html_url()),
        None => format!("#{number}"),
    }
}

/// Link to the workspace folder on the report branch.
#[must_use]
pub fn workspace_cell(name: &str, overlay_repo: Option<&RepoRef>, branch: &str) -> String {
    match overlay_repo {
        Some(repo) => format!(
            "[{name}]({}/tree/{branch}/workspaces/{name})",
            repo.html_url()
        ),
        None => name.to_string(),
    }
}

/// Link to the pinned upstream commit, with the commit headline when known.
#[must_use]
pub fn source_cell(enriched: &EnrichedWorkspace) -> String {
    let workspace = &enriched.workspace;
    let (Some(url), Some(reference)) = (workspace.repo_url(), workspace.commit_ref()) else {
        return NOT_AVAILABLE.to_string();
    };

    let commit = enriched.commit.value();
    let short = commit.map_or_else(|| short_sha(reference), |c| c.short_sha.clone());
    let repo_label = enriched
        .repo
        .as_ref()
        .map_or_else(|| url.to_string(), RepoRef::full_name);
    let base_url = enriched
        .repo
        .as_ref()
        .map_or_else(|| url.trim_end_matches('/').to_string(), RepoRef::html_url);

    let mut cell = format!("[{repo_label}@{short}]({base_url}/commit/{reference})");
    if let Some(message) = commit.map(|c| c.message.as_str()).filter(|m| !m.is_empty()) {
        cell.push_str(CELL_BREAK);
        cell.push_str(&escape_cell(message));
    }
    cell
}

/// Author date of the pinned commit.
#[must_use]
pub fn commit_date_cell(enriched: &EnrichedWorkspace) -> String {
    enriched
        .commit
        .value()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.date.clone())
}

/// Declared framework version, flagged when upstream differs.
#[must_use]
pub fn backstage_cell(declared: Option<&str>, upstream: Option<&str>) -> String {
    match (declared, upstream) {
        (Some(declared), Some(upstream)) if declared != upstream => {
            format!("`{declared}` 🔺{CELL_BREAK}upstream: `{upstream}`")
        }
        (Some(version), _) | (None, Some(version)) => format!("`{version}`"),
        (None, None) => NOT_AVAILABLE.to_string(),
    }
}

/// One line per plugin with its support glyph.
#[must_use]
pub fn plugins_cell(plugins: &[PluginEntry]) -> String {
    if plugins.is_empty() {
        return "_No plugins listed_".to_string();
    }

    plugins
        .iter()
        .map(|p| format!("{} `{}`", p.support.glyph(), escape_cell(p.label())))
        .collect::<Vec<_>>()
        .join(CELL_BREAK)
}
