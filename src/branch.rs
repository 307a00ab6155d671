//! Upstream branch naming.
//!
//! AOSP release branches are named `android-<suffix>`, where the suffix is
//! what the user passes on the command line (`13`, `14.0.0_r1`, ...).

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

const BRANCH_PREFIX: &str = "android-";

/// A validated upstream branch name such as `android-13`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UpstreamBranch(String);

impl UpstreamBranch {
    /// Build the branch name from the suffix given on the command line.
    pub fn from_suffix(suffix: &str) -> Result<Self> {
        if suffix.is_empty() {
            return Err(Error::InvalidBranch {
                suffix: suffix.to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if suffix.chars().any(char::is_whitespace) {
            return Err(Error::InvalidBranch {
                suffix: suffix.to_string(),
                message: "must not contain whitespace".to_string(),
            });
        }
        Ok(Self(format!("{}{}", BRANCH_PREFIX, suffix)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UpstreamBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
