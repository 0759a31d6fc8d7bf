//! Settings the CLI resolves before handing off to the parsing core.

use crate::Result;
use crate::model::AddonsDir;
use anyhow::bail;
use clap::ValueEnum;
use std::path::PathBuf;

/// Where vim-addon-manager installs plugins by default.
pub const DEFAULT_ADDONS_DIR: &str = "~/.vim/addons";

/// Editor launched when profiling live runs.
pub const DEFAULT_VIM: &str = "vim";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// How to obtain the log: parse an existing file or launch the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    File(PathBuf),
    Launch {
        vim: String,
        runs: usize,
        /// Extra arguments passed to every editor launch.
        args: Vec<String>,
    },
}

/// Expand `~` and normalize the trailing separator.
///
/// An empty path is refused: it would normalize to `/` and group every
/// sourced file by its top-level directory.
pub fn resolve_addons_dir(raw: &str) -> Result<AddonsDir> {
    let expanded = shellexpand::tilde(raw.trim());
    if expanded.trim_end_matches('/').is_empty() {
        bail!("addons dir must name a directory below the root, got {:?}", raw);
    }
    Ok(AddonsDir::new(expanded))
}
