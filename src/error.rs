//! # Error Handling
//!
//! This module defines the centralized error type for `aosp-merge`. It uses
//! `thiserror` to build a single `Error` enum covering every failure the
//! library can report, each variant carrying enough context (file path,
//! repository, command) to tell the user what to fix.
//!
//! Only [`Error::GitCommand`] is recovered from during the pull phase; the
//! repository is then recorded as a failure. Every other variant aborts the
//! run and is reported by the binary.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for aosp-merge operations
#[derive(Error, Debug)]
pub enum Error {
    /// A manifest file could not be read from disk.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest file is not well-formed XML.
    #[error("Failed to parse manifest {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    /// A git command failed for a repository.
    #[error("Git command failed for {repo}: {command} - {stderr}")]
    GitCommand {
        command: String,
        repo: String,
        stderr: String,
    },

    /// The multi-repo sync tool could not be started.
    #[error("Sync tool error: {tool} - {message}")]
    SyncTool { tool: String, message: String },

    /// The branch suffix given on the command line cannot form a branch name.
    #[error("Invalid branch suffix '{suffix}': {message}")]
    InvalidBranch { suffix: String, message: String },

    /// A manifest path would resolve outside the source tree.
    #[error("Invalid repository path '{path}': {message}")]
    InvalidRepoPath { path: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
