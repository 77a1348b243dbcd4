//! Plugin support classification against static allow-lists.

use crate::config::read_list_file_or_empty;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Support level of a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLevel {
    /// Listed in the supported allow-list.
    Supported,

    /// Listed in the community allow-list.
    Community,

    /// In neither list.
    Unknown,
}

impl SupportLevel {
    /// Glyph shown next to a plugin in the report.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Supported => "🟢",
            Self::Community => "🟡",
            Self::Unknown => "⚪",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::Community => "Community",
            Self::Unknown => "Unknown",
        }
    }
}

/// The two allow-lists.
///
/// Entries are either `<workspace>/<plugin path>` or a plugin path exactly as
/// declared in `plugins-list.yaml`.
#[derive(Debug, Clone, Default)]
pub struct SupportLists {
    supported: HashSet<String>,
    community: HashSet<String>,
}

impl SupportLists {
    /// Builds lists from raw entries.
    ///
    /// Entries may carry a leading `workspaces/` or a trailing `/`; both are
    /// stripped.
    pub fn new<S, C>(supported: S, community: C) -> Self
    where
        S: IntoIterator<Item = String>,
        C: IntoIterator<Item = String>,
    {
        Self {
            supported: supported.into_iter().map(|e| normalize(&e)).collect(),
            community: community.into_iter().map(|e| normalize(&e)).collect(),
        }
    }

    /// Loads both allow-lists from disk. Missing files are treated as empty.
    pub fn load(supported_path: &Path, community_path: &Path) -> Self {
        let lists = Self::new(
            read_list_file_or_empty(supported_path),
            read_list_file_or_empty(community_path),
        );
        info!(
            supported = lists.supported.len(),
            community = lists.community.len(),
            "Loaded support allow-lists"
        );
        lists
    }

    /// Classifies a plugin of a workspace by exact match of either the
    /// workspace-qualified path or the declared path.
    ///
    /// Supported wins if a plugin appears in both lists.
    #[must_use]
    pub fn classify(&self, workspace: &str, plugin_path: &str) -> SupportLevel {
        let declared = normalize(plugin_path.trim().trim_start_matches("./"));
        let qualified = normalize(&format!("{workspace}/{declared}"));
        let listed = |list: &HashSet<String>| list.contains(&qualified) || list.contains(&declared);

        if listed(&self.supported) {
            SupportLevel::Supported
        } else if listed(&self.community) {
            SupportLevel::Community
        } else {
            SupportLevel::Unknown
        }
    }
}

fn normalize(entry: &str) -> String {
    let entry = entry.trim();
    let entry = entry.strip_prefix("workspaces/").unwrap_or(entry);
    entry.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lists() -> SupportLists {
        SupportLists::new(
            vec!["backstage/plugins/kubernetes".to_string()],
            vec![
                "workspaces/3scale/plugins/3scale-backend/".to_string(),
                "backstage/plugins/kubernetes".to_string(),
            ],
        )
    }

    #[test]
    fn classifies_by_list_membership() {
        let lists = lists();

        assert_eq!(
            lists.classify("backstage", "plugins/kubernetes"),
            SupportLevel::Supported
        );
        assert_eq!(
            lists.classify("3scale", "plugins/3scale-backend"),
            SupportLevel::Community
        );
        assert_eq!(
            lists.classify("3scale", "plugins/other"),
            SupportLevel::Unknown
        );
    }

    #[test]
    fn matching_is_exact() {
        let lists = lists();
        assert_eq!(
            lists.classify("backstage", "plugins/kubernetes-backend"),
            SupportLevel::Unknown
        );
        assert_eq!(
            lists.classify("backstage", "./plugins/kubernetes"),
            SupportLevel::Supported
        );
    }

    #[test]
    fn declared_path_listed_verbatim() {
        let lists = SupportLists::new(
            vec!["plugins/tekton".to_string()],
            vec!["plugins/tekton".to_string(), "plugins/tekton-common".to_string()],
        );

        assert_eq!(lists.classify("tekton", "plugins/tekton"), SupportLevel::Supported);
        assert_eq!(lists.classify("tekton", "./plugins/tekton"), SupportLevel::Supported);
        assert_eq!(
            lists.classify("tekton", "plugins/tekton-common"),
            SupportLevel::Community
        );
        assert_eq!(lists.classify("tekton", "plugins/tekton-ui"), SupportLevel::Unknown);
    }

    #[test]
    fn loads_from_files() {
        let temp = TempDir::new().unwrap();
        let supported = temp.path().join("supported.txt");
        fs::write(&supported, "# supported\nacr/plugins/acr\n").unwrap();

        let lists = SupportLists::load(&supported, &temp.path().join("missing.txt"));

        assert_eq!(lists.classify("acr", "plugins/acr"), SupportLevel::Supported);
        assert_eq!(lists.classify("acr", "plugins/other"), SupportLevel::Unknown);
    }

    #[test]
    fn glyphs_differ_per_level() {
        assert_ne!(SupportLevel::Supported.glyph(), SupportLevel::Community.glyph());
        assert_ne!(SupportLevel::Community.glyph(), SupportLevel::Unknown.glyph());
        assert_eq!(SupportLevel::Community.as_str(), "Community");
    }
}
