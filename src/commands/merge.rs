//! Merge command implementation
//!
//! Resolves the source tree and options, runs the merge, and prints the
//! report to stdout. Progress goes to stderr through the logger.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use aosp_merge::branch::UpstreamBranch;
use aosp_merge::defaults::{
    default_jobs, find_source_root, DEFAULT_BASE_URL, DEFAULT_CUSTOM_MANIFEST, DEFAULT_REPO_BIN,
};
use aosp_merge::orchestrator::{self, MergeConfig, Outcome};
use aosp_merge::output::OutputConfig;
use aosp_merge::report;
use aosp_merge::sync::SyncOptions;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Arguments for the merge command
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// AOSP version to merge; `13` merges branch android-13
    #[arg(value_name = "VERSION")]
    pub aosp_version: String,

    /// Root of the repo checkout (defaults to the nearest directory containing .repo)
    #[arg(long, value_name = "PATH", env = "AOSP_MERGE_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Custom manifest file in .repo/manifests listing the ROM's repositories
    #[arg(
        long,
        value_name = "NAME",
        env = "AOSP_MERGE_MANIFEST",
        default_value = DEFAULT_CUSTOM_MANIFEST
    )]
    pub manifest: String,

    /// URL prefix of upstream projects
    #[arg(
        long,
        value_name = "URL",
        env = "AOSP_MERGE_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Number of parallel sync jobs (defaults to the CPU count)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Sync tool to run
    #[arg(
        long,
        value_name = "PATH",
        env = "AOSP_MERGE_REPO_BIN",
        default_value = DEFAULT_REPO_BIN
    )]
    pub repo_bin: PathBuf,

    /// Keep existing checkouts instead of removing and re-syncing them
    #[arg(long)]
    pub skip_sync: bool,

    /// List the repositories that would be merged and exit
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Also list repositories that were already up to date
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the merge command
pub fn execute(args: MergeArgs, output: &OutputConfig) -> Result<()> {
    let branch = UpstreamBranch::from_suffix(&args.aosp_version)?;

    let source_dir = match args.source_dir {
        Some(dir) => dir,
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            find_source_root(&cwd).unwrap_or(cwd)
        }
    };

    let config = MergeConfig {
        source_dir,
        custom_manifest: args.manifest,
        branch,
        base_url: args.base_url,
        sync: SyncOptions {
            repo_bin: args.repo_bin,
            jobs: args.jobs.unwrap_or_else(default_jobs),
        },
        skip_sync: args.skip_sync,
        dry_run: args.dry_run,
    };

    match orchestrator::run(&config)? {
        Outcome::DryRun(repos) => match args.format {
            ReportFormat::Text => {
                println!("Repositories to merge from {}:", config.branch);
                for repo in repos {
                    println!("{}", repo);
                }
            }
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&repos)?),
        },
        Outcome::Merged(merge_report) => match args.format {
            ReportFormat::Text => {
                print!(
                    "{}",
                    report::render_text(&merge_report, args.verbose, output)
                )
            }
            ReportFormat::Json => println!("{}", report::render_json(&merge_report)?),
        },
    }

    Ok(())
}
