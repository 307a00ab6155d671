//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture that lays out a fake repo checkout next
//! to a directory of local git repositories standing in for upstream AOSP.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = CheckoutFixture::new().with_manifests(DEFAULT, INCLUDE);
//!     fixture.command().arg("13").arg("--dry-run").assert().success();
//! }
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::CheckoutFixture;
}

/// Manifest snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Upstream manifest with three AOSP projects.
    pub const DEFAULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote name="aosp" fetch=".." />
  <default revision="android-13" remote="aosp" />
  <project path="build/make" name="platform/build" />
  <project path="frameworks/base" name="platform/frameworks/base" />
  <project path="packages/apps/Settings" name="platform/packages/apps/Settings" />
</manifest>
"#;

    /// Custom manifest forking two AOSP projects and adding a vendor one.
    pub const INCLUDE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote name="rom" fetch="https://github.com/example-rom" />
  <remove-project name="platform/build" />
  <project path="build/make" name="android_build" remote="rom" />
  <project path="frameworks/base" name="android_frameworks_base" remote="rom" />
  <project path="vendor/rom" name="android_vendor_rom" remote="rom" />
</manifest>
"#;
}

/// A temporary `source/` checkout plus an `upstream/` directory of git
/// repositories that `--base-url` can point at.
pub struct CheckoutFixture {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl CheckoutFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        temp.child("source").create_dir_all().unwrap();
        temp.child("upstream").create_dir_all().unwrap();
        Self { temp }
    }

    pub fn source(&self) -> PathBuf {
        self.temp.path().join("source")
    }

    pub fn upstream(&self) -> PathBuf {
        self.temp.path().join("upstream")
    }

    /// `--base-url` value resolving project names inside `upstream/`.
    pub fn base_url(&self) -> String {
        format!("{}/", self.upstream().display())
    }

    /// Write `default.xml` and `include.xml` into `.repo/manifests`.
    pub fn with_manifests(self, default: &str, include: &str) -> Self {
        let dir = self.temp.child("source/.repo/manifests");
        dir.create_dir_all().unwrap();
        dir.child("default.xml").write_str(default).unwrap();
        dir.child("include.xml").write_str(include).unwrap();
        self
    }

    /// Create an upstream project with one commit on `branch`.
    pub fn add_upstream(&self, name: &str, branch: &str) -> PathBuf {
        let dir = self.upstream().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        git(&dir, &["init", "-q"]);
        git(&dir, &["symbolic-ref", "HEAD", &format!("refs/heads/{}", branch)]);
        commit_file(&dir, "README", "upstream\n", "Initial upstream commit");
        dir
    }

    /// Clone the upstream project `name` into `source/<path>`.
    pub fn clone_into_source(&self, name: &str, path: &str) -> PathBuf {
        let url = self.upstream().join(name);
        git(
            &self.source(),
            &["clone", "-q", url.to_str().unwrap(), path],
        );
        self.source().join(path)
    }

    /// Create a standalone repository at `source/<path>`.
    pub fn add_local_repo(&self, path: &str) -> PathBuf {
        let dir = self.source().join(path);
        std::fs::create_dir_all(&dir).unwrap();
        git(&dir, &["init", "-q"]);
        commit_file(&dir, "README", "local\n", "Local only repository");
        dir
    }

    /// The binary, isolated from the user's git configuration.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("aosp-merge");
        cmd.current_dir(self.source())
            .env("HOME", self.temp.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("AOSP_MERGE_SOURCE_DIR")
            .env_remove("AOSP_MERGE_MANIFEST")
            .env_remove("AOSP_MERGE_BASE_URL")
            .env_remove("AOSP_MERGE_REPO_BIN");
        cmd
    }
}

/// Run git in `dir` with a fixed identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

/// Write `name` in `dir` and commit it with `message`.
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    std::fs::write(dir.join(name), content).unwrap();
    git(dir, &["add", name]);
    git(dir, &["commit", "-q", "-m", message]);
}
