//! Force-sync of the repositories about to be merged.
//!
//! The checkouts are deleted and restored by the multi-repo sync tool so
//! every merge starts from the ROM's current manifest revision rather than
//! whatever local state the tree was left in.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::error::{Error, Result};

/// How to invoke the sync tool.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Sync tool binary, `repo` unless overridden
    pub repo_bin: PathBuf,
    /// Number of parallel fetch jobs handed to the sync tool
    pub jobs: usize,
}

impl SyncOptions {
    /// Arguments passed to the sync tool.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = [
            "sync",
            "-c",
            "--force-sync",
            "-f",
            "--no-clone-bundle",
            "--no-tag",
            "-j",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        args.push(self.jobs.to_string());
        args.push("-q".to_string());
        args
    }
}

/// Directory of `repo` inside `source_dir`.
///
/// Manifest paths must be relative and made of plain components only, so
/// the result never escapes the source tree.
pub fn checkout_dir(source_dir: &Path, repo: &str) -> Result<PathBuf> {
    let path = Path::new(repo);
    let plain = path
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if repo.is_empty() || !plain {
        return Err(Error::InvalidRepoPath {
            path: repo.to_string(),
            message: "must be a relative path inside the source tree".to_string(),
        });
    }
    Ok(source_dir.join(path))
}

/// Delete the checkout of every repository in `repos` that exists.
///
/// Every path is validated before anything is removed. Returns the
/// directories that were removed.
pub fn remove_checkouts(source_dir: &Path, repos: &[String]) -> Result<Vec<PathBuf>> {
    let dirs = repos
        .iter()
        .map(|repo| checkout_dir(source_dir, repo))
        .collect::<Result<Vec<_>>>()?;

    let mut removed = Vec::new();
    for dir in dirs {
        if dir.is_dir() {
            fs::remove_dir_all(&dir)?;
            removed.push(dir);
        }
    }
    Ok(removed)
}

/// Run the sync tool in `source_dir`.
///
/// Failing to start the tool is an error. A non-zero exit is only logged:
/// repositories that did come back can still be merged, and the ones that
/// did not will show up as merge failures.
pub fn force_sync(source_dir: &Path, options: &SyncOptions) -> Result<()> {
    let tool = options.repo_bin.display().to_string();
    info!("Syncing repos with {} ({} jobs)", tool, options.jobs);

    let status = Command::new(&options.repo_bin)
        .args(options.args())
        .current_dir(source_dir)
        .status()
        .map_err(|e| Error::SyncTool {
            tool: tool.clone(),
            message: e.to_string(),
        })?;

    if !status.success() {
        warn!("{} sync exited with {}", tool, status);
    }
    Ok(())
}
