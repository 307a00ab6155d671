//! Default values for aosp-merge configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! orchestrator, ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Prefix that upstream repository names are appended to.
pub const DEFAULT_BASE_URL: &str = "https://android.googlesource.com/platform/";

/// Name of the custom manifest inside `.repo/manifests`.
pub const DEFAULT_CUSTOM_MANIFEST: &str = "include.xml";

/// Name of the upstream manifest inside `.repo/manifests`.
pub const AOSP_MANIFEST: &str = "default.xml";

/// Multi-repo sync tool invoked to restore removed checkouts.
pub const DEFAULT_REPO_BIN: &str = "repo";

/// Directory of a checkout that holds the `repo` tool state.
pub const REPO_DIR: &str = ".repo";

/// Returns the directory holding the manifests of a checkout.
pub fn manifests_dir(source_dir: &Path) -> PathBuf {
    source_dir.join(REPO_DIR).join("manifests")
}

/// Returns the default number of sync jobs.
///
/// Uses the number of available CPUs, falling back to 1 when it cannot be
/// determined.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Find the root of a repo checkout starting from `start`.
///
/// Walks up from `start` and returns the first directory that contains a
/// `.repo` directory. Returns `None` if no ancestor qualifies.
pub fn find_source_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(REPO_DIR).is_dir())
        .map(Path::to_path_buf)
}
