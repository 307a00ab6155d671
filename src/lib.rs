//! # AOSP Merge Library
//!
//! This library merges an upstream AOSP release branch into the forked
//! repositories of a custom ROM checked out with `repo`. It is designed to be
//! used by the `aosp-merge` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use aosp_merge::branch::UpstreamBranch;
//! use aosp_merge::manifest::select_repos;
//!
//! let aosp = vec!["build/make".to_string(), "frameworks/base".to_string()];
//! let custom = vec!["frameworks/base".to_string(), "vendor/rom".to_string()];
//!
//! assert_eq!(select_repos(&aosp, &custom), vec!["manifest", "frameworks/base"]);
//! assert_eq!(UpstreamBranch::from_suffix("13").unwrap().as_str(), "android-13");
//! ```
//!
//! ## Execution Flow
//!
//! The main entry point is [`orchestrator::run`], which executes the
//! following steps:
//!
//! 1.  **Selection**: Intersect the custom manifest with AOSP's `default.xml`
//!     (`manifest`).
//! 2.  **Sync**: Delete the selected checkouts and restore them with
//!     `repo sync` (`sync`).
//! 3.  **Pull**: Pull `android-<version>` into every selected repository,
//!     collecting failures instead of stopping (`merge`, `git`).
//! 4.  **Classification**: Separate real merges from repositories that were
//!     already up to date (`merge`).
//! 5.  **Report**: Render the outcome as text or JSON (`report`).

pub mod branch;
pub mod defaults;
pub mod error;
pub mod git;
pub mod manifest;
pub mod merge;
pub mod orchestrator;
pub mod output;
pub mod report;
pub mod sync;

#[cfg(test)]
mod manifest_proptest;
