//! Split a multi-run log into per-run line ranges.
//!
//! Vim appends to an existing `--startuptime` file, so a log produced by N
//! launches holds N runs, each opened by a `--- VIM STARTING ---` line.

use std::ops::Range;

/// Substring marking the first line of a run.
pub const RUN_SENTINEL: &str = "VIM STARTING";

/// Contiguous `[start_i, start_{i+1})` ranges, one per run.
///
/// Lines before the first sentinel belong to no run. A log without any
/// sentinel is a single run covering every line.
pub fn segment_runs<S: AsRef<str>>(lines: &[S]) -> Vec<Range<usize>> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.as_ref().contains(RUN_SENTINEL))
        .map(|(idx, _)| idx)
        .collect();

    if starts.is_empty() {
        return vec![0..lines.len()];
    }

    starts
        .iter()
        .zip(starts.iter().skip(1).chain(std::iter::once(&lines.len())))
        .map(|(&start, &end)| start..end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_runs() {
        let lines = [
            "header",
            "0.001 0.001: --- VIM STARTING ---",
            "1.0 1.0 a",
            "0.001 0.001: --- VIM STARTING ---",
            "1.0 1.0 a",
            "2.0 1.0 b",
        ];
        assert_eq!(segment_runs(&lines), vec![1..3, 3..6]);
    }

    #[test]
    fn no_sentinel_is_one_run() {
        let lines = ["1.0 1.0 a", "2.0 1.0 b"];
        assert_eq!(segment_runs(&lines), vec![0..2]);
    }

    #[test]
    fn empty_log_is_one_empty_run() {
        let lines: [&str; 0] = [];
        assert_eq!(segment_runs(&lines), vec![0..0]);
    }

    #[test]
    fn sentinel_on_last_line() {
        let lines = ["1.0 1.0 a", "VIM STARTING"];
        assert_eq!(segment_runs(&lines), vec![1..2]);
    }
}
