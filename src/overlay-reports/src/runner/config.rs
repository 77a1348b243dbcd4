//! Runner configuration.

use crate::config::ReportSettings;
use std::path::{Path, PathBuf};

/// Configuration for a wiki report run, built once at startup.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory holding one folder per workspace.
    workspaces_path: PathBuf,
    /// Directory the report is written to.
    output_dir: PathBuf,
    /// Branch the report describes.
    branch: String,
    /// Overlay repository in "owner/name" format.
    repo_name: String,
    /// GitHub token used for API calls.
    token: Option<String>,
    /// Whether remote lookups are disabled.
    offline: bool,
    /// Optional settings.
    settings: ReportSettings,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        workspaces_path: PathBuf,
        branch: String,
        repo_name: String,
        token: Option<String>,
        offline: bool,
    ) -> Self {
        Self {
            workspaces_path,
            output_dir: PathBuf::from("."),
            branch,
            repo_name,
            token: token.filter(|t| !t.trim().is_empty()),
            offline,
            settings: ReportSettings::default(),
        }
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Sets loaded settings.
    pub fn with_settings(mut self, settings: ReportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the workspaces directory path.
    pub fn workspaces_path(&self) -> &Path {
        &self.workspaces_path
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the report branch.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Returns the overlay repository identifier.
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether remote lookups are disabled.
    pub fn offline(&self) -> bool {
        self.offline
    }

    /// Returns the settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }
}
