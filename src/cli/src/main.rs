//! CLI for overlay repository reports.
//!
//! Generates the workspace wiki page, the support-level comparison and
//! catalog metadata boilerplate.

use clap::{Parser, Subcommand};
use overlay_reports::metadata_gen::{DEFAULT_INPUT, DEFAULT_REPO_BASE_URL};
use overlay_reports::{
    generate_metadata, write_support_diff, GeneratorConfig, GeneratorError, ReportSettings,
    RunSummary, Runner, RunnerConfig, RunnerError, SupportDiffConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Overlay Reports - Generate status documents for plugin export overlay repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the Markdown wiki page for one branch.
    Wiki(WikiArgs),

    /// Compare support levels between two metadata trees.
    SupportDiff(SupportDiffArgs),

    /// Generate metadata.yaml boilerplate from a plugin list.
    GenerateMetadata(GenerateMetadataArgs),
}

#[derive(clap::Args, Debug)]
struct WikiArgs {
    /// Path to the workspaces folder.
    #[arg(long, default_value = "workspaces")]
    workspaces_path: PathBuf,

    /// Branch the report describes.
    #[arg(long, env = "BRANCH_NAME", default_value = "main")]
    branch: String,

    /// Overlay repository in "owner/name" format.
    #[arg(long, env = "REPO_NAME", default_value = "unknown/unknown")]
    repo: String,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Skip all GitHub lookups.
    #[arg(long)]
    offline: bool,

    /// Directory the page is written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Path to an optional TOML settings file.
    #[arg(long)]
    settings_path: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct SupportDiffArgs {
    /// Tree searched for metadata/*.yaml files.
    #[arg(long, default_value = "workspaces")]
    new_root: PathBuf,

    /// Flat directory of previous metadata files.
    #[arg(long, default_value = "catalog-entities/marketplace/packages")]
    old_root: PathBuf,

    /// Label of the previous release.
    #[arg(long, default_value = "RHDH 1.8")]
    old_label: String,

    /// Label of the new release.
    #[arg(long, default_value = "RHDH 1.9")]
    new_label: String,

    /// Output AsciiDoc file.
    #[arg(long, default_value = "support_tags_comparison.adoc")]
    output: PathBuf,
}

#[derive(clap::Args, Debug)]
struct GenerateMetadataArgs {
    /// Plugin list, one path per line.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Overlay tree the files are written into.
    #[arg(long, default_value = "workspaces")]
    overlay_root: PathBuf,

    /// Overlay repository web URL used in the annotations.
    #[arg(long, default_value = DEFAULT_REPO_BASE_URL)]
    repo_base_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match args.command {
        Command::Wiki(args) => match run_wiki(args).await {
            Ok(summary) => {
                print_summary(&summary);
                ExitCode::from(0)
            }
            Err(e) => {
                error!(error = %e, "Critical failure");
                ExitCode::from(2)
            }
        },
        Command::SupportDiff(args) => run_support_diff(args),
        Command::GenerateMetadata(args) => run_generate_metadata(args),
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the runner configuration and generates the wiki page.
async fn run_wiki(args: WikiArgs) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(
        args.workspaces_path,
        args.branch,
        args.repo,
        args.token,
        args.offline,
    )
    .with_output_dir(args.output_dir);
    if let Some(path) = args.settings_path {
        config = config.with_settings(ReportSettings::load(&path)?);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

fn run_support_diff(args: SupportDiffArgs) -> ExitCode {
    let config = SupportDiffConfig {
        new_root: args.new_root,
        old_root: args.old_root,
        old_label: args.old_label,
        new_label: args.new_label,
        output_path: args.output,
    };

    match write_support_diff(&config) {
        Ok(comparison) => {
            println!("\nSummary:");
            println!("  Support level changes: {}", comparison.changed.len());
            println!("  New plugins: {}", comparison.added.len());
            println!("  Output: {}", config.output_path.display());
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

fn run_generate_metadata(args: GenerateMetadataArgs) -> ExitCode {
    let config = GeneratorConfig {
        input: args.input,
        overlay_root: args.overlay_root,
        repo_base_url: args.repo_base_url,
    };

    match generate_metadata(&config) {
        Ok(written) => {
            info!(files = written.len(), "Metadata generation complete");
            ExitCode::from(0)
        }
        Err(e @ GeneratorError::MissingInput { .. }) => {
            error!(error = %e, "Input list not found");
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.offline { "Offline" } else { "Online" }
    );
    println!("  Workspaces processed: {}", summary.workspaces_processed);
    println!("  Missing source.json: {}", summary.descriptors_missing);
    println!(
        "  Workspaces with pending PRs: {}",
        summary.workspaces_with_pending_prs
    );

    if !summary.offline {
        println!("  Unavailable lookups: {}", summary.lookups_unavailable);
        println!(
            "  All lookups succeeded: {}",
            if summary.all_lookups_succeeded() { "yes" } else { "no" }
        );
    }
    if let Some(path) = &summary.output_path {
        println!("  Output: {}", path.display());
    }
}
