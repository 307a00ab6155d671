//! # Pulling Upstream Branches
//!
//! Each selected repository gets the upstream branch pulled into its
//! checkout. A pull that fails (conflict, missing upstream project, network
//! error) does not stop the run: the repository is recorded as a failure
//! so it can be fixed by hand afterwards.
//!
//! A pull that succeeds is not necessarily a merge. When the checkout
//! already contains the upstream branch, git reports "Already up to date"
//! and HEAD is unchanged. Otherwise the pull always records a merge commit,
//! even when a fast-forward was possible. [`classify`] tells the two apart
//! by looking for the branch name in the latest commit message, which git's
//! generated merge message always contains.

use std::path::Path;

use log::{error, info};
use serde::Serialize;

use crate::branch::UpstreamBranch;
use crate::error::{Error, Result};
use crate::git;
use crate::sync::checkout_dir;

/// Repositories whose upstream project name differs from their path.
const UPSTREAM_NAME_OVERRIDES: &[(&str, &str)] = &[("build/make", "build")];

/// Outcome of the pull phase, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResults {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

/// Final classification of every processed repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub branch: UpstreamBranch,
    /// Pulled, and HEAD is a commit naming the upstream branch
    pub merged: Vec<String>,
    /// Pulled without bringing in the upstream branch
    pub up_to_date: Vec<String>,
    /// Pull failed; needs manual attention
    pub failures: Vec<String>,
}

impl MergeReport {
    /// True when nothing failed and at least one repository merged.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.merged.is_empty()
    }

    /// True when the run produced neither merges nor failures.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty() && self.merged.is_empty()
    }
}

/// URL of the upstream project for `repo`.
pub fn upstream_url(base_url: &str, repo: &str) -> String {
    let name = UPSTREAM_NAME_OVERRIDES
        .iter()
        .find(|(path, _)| *path == repo)
        .map(|(_, name)| *name)
        .unwrap_or(repo);
    format!("{}{}", base_url, name)
}

/// Pull `branch` into every repository of `repos`.
///
/// Git failures are logged and collected; any other error, including a
/// repository path outside `source_dir`, aborts.
pub fn merge_all(
    source_dir: &Path,
    repos: &[String],
    base_url: &str,
    branch: &UpstreamBranch,
) -> Result<MergeResults> {
    let mut results = MergeResults::default();

    for repo in repos {
        let url = upstream_url(base_url, repo);
        info!("Merging {} from {}", repo, url);

        let dir = checkout_dir(source_dir, repo)?;
        match git::pull(&dir, repo, &url, branch.as_str()) {
            Ok(()) => results.successes.push(repo.clone()),
            Err(e @ Error::GitCommand { .. }) => {
                error!("{}", e);
                results.failures.push(repo.clone());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(results)
}

/// Split successful pulls into real merges and no-op pulls.
pub fn classify(
    results: MergeResults,
    source_dir: &Path,
    branch: &UpstreamBranch,
) -> Result<MergeReport> {
    let mut merged = Vec::new();
    let mut up_to_date = Vec::new();

    for repo in results.successes {
        let message = git::head_message(&source_dir.join(&repo), &repo)?;
        if message.contains(branch.as_str()) {
            merged.push(repo);
        } else {
            up_to_date.push(repo);
        }
    }

    Ok(MergeReport {
        branch: branch.clone(),
        merged,
        up_to_date,
        failures: results.failures,
    })
}
