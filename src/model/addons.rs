//! Regroup flat action labels into a per-addon breakdown.
//!
//! Plugin managers (vim-addon-manager, pathogen, Vundle, ...) install every
//! plugin under one directory:
//!
//! ```text
//! ~/.vim/addons/<addon>/plugin/foo.vim
//! ```
//!
//! so `sourcing <addons_dir><addon>/<file>` labels tell us which addon a
//! sourced file belongs to.

use crate::model::ActionMap;
use serde::Serialize;
use std::fmt;

const SOURCING_PREFIX: &str = "sourcing ";

/// Addons directory, always ending in exactly one `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonsDir(String);

impl AddonsDir {
    pub fn new(path: impl AsRef<str>) -> Self {
        let trimmed = path.as_ref().trim_end_matches('/');
        Self(format!("{}/", trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AddonsDir {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for AddonsDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddonFile {
    /// Path relative to the addon root.
    pub path: String,
    pub elapsed_avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddonEntry {
    pub name: String,
    pub files: Vec<AddonFile>,
    /// Sum of `elapsed_avg` over `files`.
    pub total: f64,
}

/// Addons in the order their first file was seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddonTree {
    pub addons: Vec<AddonEntry>,
}

impl AddonTree {
    pub fn get(&self, name: &str) -> Option<&AddonEntry> {
        self.addons.iter().find(|a| a.name == name)
    }

    /// Addons ascending by total; ties keep first-seen order.
    pub fn sorted_by_total(&self) -> Vec<&AddonEntry> {
        let mut out: Vec<&AddonEntry> = self.addons.iter().collect();
        out.sort_by(|a, b| a.total.total_cmp(&b.total));
        out
    }
}

/// Split `<addon>/<file>` into its addon name and addon-relative path.
///
/// A file directly in the addons root is its own addon.
fn split_addon_path(rel: &str) -> (&str, &str) {
    match rel.split_once('/') {
        Some((addon, file)) => (addon, file),
        None => (rel, rel),
    }
}

/// Group `sourcing <addons_dir>...` actions by addon.
///
/// Every other label is left out.
pub fn group(actions: &ActionMap, addons_dir: &AddonsDir) -> AddonTree {
    let prefix = format!("{}{}", SOURCING_PREFIX, addons_dir);
    let mut tree = AddonTree::default();

    for (label, avg) in actions {
        let Some(rel) = label.strip_prefix(prefix.as_str()) else {
            continue;
        };
        let (name, path) = split_addon_path(rel);

        let file = AddonFile {
            path: path.to_string(),
            elapsed_avg: avg.elapsed_avg,
        };
        match tree.addons.iter_mut().find(|a| a.name == name) {
            Some(entry) => {
                entry.total += file.elapsed_avg;
                entry.files.push(file);
            }
            None => tree.addons.push(AddonEntry {
                name: name.to_string(),
                total: file.elapsed_avg,
                files: vec![file],
            }),
        }
    }

    tree
}
