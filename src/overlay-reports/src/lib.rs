#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod enrichment;
pub mod github;
pub mod manifests;
pub mod metadata_gen;
pub mod report;
pub mod runner;
pub mod summary;
pub mod support;
pub mod support_diff;
pub mod templates;
pub mod workspaces;

pub use config::{read_list_file, ConfigError, ReportSettings};
pub use enrichment::{EnrichedWorkspace, Enricher, PluginEntry};
pub use github::{CommitInfo, GitHubClient, Lookup, PendingPullRequests, RemoteError, RepoRef};
pub use manifests::{BackstageManifest, PackageManifest};
pub use metadata_gen::{generate_metadata, GeneratorConfig, GeneratorError, MetadataEntry};
pub use report::{ReportRow, WikiPage};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
pub use support::{SupportLevel, SupportLists};
pub use support_diff::{
    compare_support_levels, write_support_diff, DiffError, SupportComparison, SupportDiffConfig,
};
pub use templates::{create_handlebars_registry, wiki_page_file_name, TemplateError, TemplateRenderer};
pub use workspaces::{discover_workspaces, SourceDescriptor, Workspace};
