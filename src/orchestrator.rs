//! End-to-end merge run.
//!
//! Steps, in order:
//! 1. Read both manifests and select the repositories to merge
//! 2. Remove their checkouts and force-sync them
//! 3. Pull the upstream branch into each
//! 4. Classify the results

use std::path::PathBuf;

use log::info;

use crate::branch::UpstreamBranch;
use crate::error::Result;
use crate::manifest::Manifests;
use crate::merge::{self, MergeReport};
use crate::sync::{self, SyncOptions};

/// Everything a merge run needs, resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Root of the repo checkout (the directory containing `.repo`)
    pub source_dir: PathBuf,
    /// File name of the custom manifest in `.repo/manifests`
    pub custom_manifest: String,
    pub branch: UpstreamBranch,
    /// Prefix that upstream project names are appended to
    pub base_url: String,
    pub sync: SyncOptions,
    /// Keep existing checkouts and do not run the sync tool
    pub skip_sync: bool,
    /// Only report which repositories would be merged
    pub dry_run: bool,
}

/// Result of a run.
///
/// The `manifest` repository is always selected, so a run never has an
/// empty set of repositories to work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry run: the repositories that would have been merged
    DryRun(Vec<String>),
    Merged(MergeReport),
}

/// Execute a merge run.
pub fn run(config: &MergeConfig) -> Result<Outcome> {
    info!("Finding repos to merge...");
    let manifests = Manifests::load(&config.source_dir, &config.custom_manifest)?;
    let repos = manifests.repos_to_merge();
    info!("{} repositories to merge", repos.len());

    if config.dry_run {
        return Ok(Outcome::DryRun(repos));
    }

    if config.skip_sync {
        info!("Skipping sync");
    } else {
        let removed = sync::remove_checkouts(&config.source_dir, &repos)?;
        info!("Removed {} checkouts", removed.len());
        sync::force_sync(&config.source_dir, &config.sync)?;
    }

    let results = merge::merge_all(
        &config.source_dir,
        &repos,
        &config.base_url,
        &config.branch,
    )?;
    let report = merge::classify(results, &config.source_dir, &config.branch)?;

    Ok(Outcome::Merged(report))
}
