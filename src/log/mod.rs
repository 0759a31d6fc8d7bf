//! Log parsing for Vim `--startuptime` output.

pub mod line;
pub mod parse;
pub mod record;
pub mod runs;

pub use line::{Rejection, tokenize_line};
pub use parse::{ParsedLines, read_log_file, tokenize_runs};
pub use record::{LineRecord, TimingSample};
pub use runs::{RUN_SENTINEL, segment_runs};
