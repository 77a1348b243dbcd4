//! Counts of locally maintained overlay files.

use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Number of files in each auxiliary folder of a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverlayFileCounts {
    /// Files under `metadata/`.
    pub metadata: usize,

    /// Files under `plugins/` (per-plugin overlays).
    pub plugins: usize,

    /// Files under `patches/`.
    pub patches: usize,

    /// Files under `tests/`.
    pub tests: usize,
}

impl OverlayFileCounts {
    /// Counts regular files recursively in each auxiliary folder.
    ///
    /// Missing folders count as zero.
    #[must_use]
    pub fn scan(workspace_dir: &Path) -> Self {
        Self {
            metadata: count_files(&workspace_dir.join("metadata")),
            plugins: count_files(&workspace_dir.join("plugins")),
            patches: count_files(&workspace_dir.join("patches")),
            tests: count_files(&workspace_dir.join("tests")),
        }
    }

    /// Returns true if any auxiliary file exists.
    #[must_use]
    pub fn any(&self) -> bool {
        self.metadata + self.plugins + self.patches + self.tests > 0
    }
}

fn count_files(dir: &Path) -> usize {
    if !dir.is_dir() {
        return 0;
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}
