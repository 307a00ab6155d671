//! # Manifest Reading
//!
//! A repo checkout is described by XML manifests under `.repo/manifests`.
//! The upstream AOSP manifest (`default.xml`) lists every AOSP project; the
//! custom manifest (`include.xml` by default) lists the projects the ROM
//! tracks in its own forks. Only the `path` attribute of each top-level
//! element matters here:
//!
//! ```xml
//! <manifest>
//!   <remote name="rom" fetch="https://github.com/example" />
//!   <project path="build/make" name="android_build" remote="rom" />
//!   <remove-project name="platform/build" />
//! </manifest>
//! ```
//!
//! Elements without a `path` (remotes, `remove-project`, ...) are skipped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use xot::Xot;

use crate::defaults::{manifests_dir, AOSP_MANIFEST};
use crate::error::{Error, Result};

/// The manifest repository itself, always merged.
pub const MANIFEST_REPO: &str = "manifest";

/// Extract the `path` attribute of every top-level element of `xml`.
///
/// `source` is only used to label errors.
pub fn parse_paths(xml: &str, source: &Path) -> Result<Vec<String>> {
    let parse_error = |message: String| Error::ManifestParse {
        path: source.to_path_buf(),
        message,
    };

    let mut xot = Xot::new();
    let path_attr = xot.add_name("path");
    let document = xot.parse(xml).map_err(|e| parse_error(e.to_string()))?;
    let root = xot
        .children(document)
        .find(|node| xot.is_element(*node))
        .ok_or_else(|| parse_error("no root element".to_string()))?;

    let paths = xot
        .children(root)
        .filter(|node| xot.is_element(*node))
        .filter_map(|node| xot.get_attribute(node, path_attr))
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect();

    Ok(paths)
}

/// Read a manifest file and return its repository paths.
pub fn read_paths(file: &Path) -> Result<Vec<String>> {
    let xml = fs::read_to_string(file).map_err(|source| Error::ManifestRead {
        path: file.to_path_buf(),
        source,
    })?;
    let paths = parse_paths(&xml, file)?;
    debug!("{}: {} repositories", file.display(), paths.len());
    Ok(paths)
}

/// Select the repositories to merge.
///
/// Returns [`MANIFEST_REPO`] followed by every custom path that also exists
/// upstream, in custom-manifest order. Each path appears once.
pub fn select_repos(aosp_paths: &[String], custom_paths: &[String]) -> Vec<String> {
    let upstream: HashSet<&str> = aosp_paths.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(MANIFEST_REPO);

    let mut selected = vec![MANIFEST_REPO.to_string()];
    for path in custom_paths {
        if upstream.contains(path.as_str()) && seen.insert(path.as_str()) {
            selected.push(path.clone());
        }
    }
    selected
}

/// Both manifests of a checkout, loaded from disk.
#[derive(Debug, Clone)]
pub struct Manifests {
    pub aosp: Vec<String>,
    pub custom: Vec<String>,
}

impl Manifests {
    /// Load `default.xml` and `custom_name` from `<source_dir>/.repo/manifests`.
    pub fn load(source_dir: &Path, custom_name: &str) -> Result<Self> {
        let dir = manifests_dir(source_dir);
        let aosp = read_paths(&dir.join(AOSP_MANIFEST))?;
        let custom = read_paths(&dir.join(custom_name))?;
        Ok(Self { aosp, custom })
    }

    /// Repositories tracked by the custom manifest that exist upstream.
    pub fn repos_to_merge(&self) -> Vec<String> {
        select_repos(&self.aosp, &self.custom)
    }
}
