use crate::log::line::tokenize_line;
use crate::log::record::LineRecord;
use crate::log::runs::{RUN_SENTINEL, segment_runs};
use anyhow::Context;
use log::debug;
use std::fs;
use std::path::Path;

/// Accepted records from every run, in run order.
#[derive(Debug, Clone, Default)]
pub struct ParsedLines {
    pub records: Vec<LineRecord>,
    /// Number of run segments found.
    pub runs: usize,
    /// Lines inside a run that were not timing lines.
    pub rejected: usize,
}

/// Read a whole `--startuptime` log into memory.
pub fn read_log_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("read startuptime log {}", path.display()))
}

/// Segment `lines` into runs and tokenize every line of every run.
///
/// Run identity is not kept: records of all runs are returned as one stream.
/// The sentinel line opening a run is not itself a record.
pub fn tokenize_runs<S: AsRef<str>>(lines: &[S]) -> ParsedLines {
    let ranges = segment_runs(lines);
    let mut out = ParsedLines {
        runs: ranges.len(),
        ..ParsedLines::default()
    };

    for range in ranges {
        let opens_with_sentinel =
            !range.is_empty() && lines[range.start].as_ref().contains(RUN_SENTINEL);
        let body = if opens_with_sentinel {
            range.start + 1..range.end
        } else {
            range
        };

        for (lineno, line) in lines[body.clone()].iter().enumerate() {
            match tokenize_line(line.as_ref()) {
                Ok(record) => out.records.push(record),
                Err(reason) => {
                    debug!("skipping line {}: {}", body.start + lineno + 1, reason);
                    out.rejected += 1;
                }
            }
        }
    }

    out
}
