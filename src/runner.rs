//! Launch the editor with `--startuptime` to collect fresh runs.

use crate::log::read_log_file;
use anyhow::{Context, bail};
use log::info;
use std::path::Path;
use std::process::Command;

/// Launch `vim` `runs` times, each appending to `log_path`.
pub fn record_runs(vim: &str, runs: usize, args: &[String], log_path: &Path) -> anyhow::Result<()> {
    for run in 1..=runs {
        info!("run {}/{}: {} --startuptime {}", run, runs, vim, log_path.display());
        let status = Command::new(vim)
            .arg("--startuptime")
            .arg(log_path)
            .args(args)
            .status()
            .with_context(|| format!("launch {}", vim))?;
        if !status.success() {
            bail!("{} exited with {} on run {}/{}", vim, status, run, runs);
        }
    }
    Ok(())
}

/// Record `runs` launches into a scratch file and return its contents.
///
/// The scratch file is removed once read.
pub fn collect_runs(vim: &str, runs: usize, args: &[String]) -> anyhow::Result<String> {
    let log_file = tempfile::Builder::new()
        .prefix("vim-startuptime-")
        .suffix(".log")
        .tempfile()
        .context("create scratch startuptime log")?;
    record_runs(vim, runs, args, log_file.path())?;
    read_log_file(log_file.path())
}
