//! Tokenizer for a single `--startuptime` log line.
//!
//! Vim writes two shapes of timing line:
//!
//! ```text
//! 000.008  000.008: --- VIM STARTING ---
//! 010.121  000.310  000.209: sourcing /home/u/.vim/addons/foo/plugin/foo.vim
//! ```
//!
//! The first column is the clock (ms since start), the second the elapsed time
//! of the action. Sourcing lines carry an extra "self" time in front of the
//! label which we drop, keeping the "self+sourced" column as elapsed.

use crate::log::record::{LineRecord, TimingSample};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// 1) timestamp, 2) elapsed (optionally followed by ':'), 3) label: rest of line
static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S.*)$").expect("line regex is valid"));

/// Why a line was not accepted as a timing record.
///
/// Rejections are expected: logs interleave timing lines with banners and
/// blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("line has fewer than three fields")]
    MissingFields,

    #[error("timestamp is not a non-negative number: {0:?}")]
    BadTimestamp(String),

    #[error("elapsed time is not a non-negative number: {0:?}")]
    BadElapsed(String),

    #[error("label is empty once the sub-timing is stripped")]
    EmptyLabel,
}

/// Parse one line into a timing record, or say why it is not one.
pub fn tokenize_line(line: &str) -> Result<LineRecord, Rejection> {
    let Some(caps) = LINE_RE.captures(line) else {
        return Err(Rejection::MissingFields);
    };
    let (Some(ts), Some(elapsed), Some(label)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return Err(Rejection::MissingFields);
    };

    let ts = ts.as_str();
    let timestamp = parse_duration(ts).ok_or_else(|| Rejection::BadTimestamp(ts.to_string()))?;

    let elapsed_str = elapsed.as_str();
    let elapsed = parse_duration(elapsed_str.strip_suffix(':').unwrap_or(elapsed_str))
        .ok_or_else(|| Rejection::BadElapsed(elapsed_str.to_string()))?;

    let label = strip_sub_timing(label.as_str());
    if label.is_empty() {
        return Err(Rejection::EmptyLabel);
    }

    Ok(LineRecord {
        sample: TimingSample { timestamp, elapsed },
        label: label.to_string(),
    })
}

/// Drop a leading `"<float>: "` annotation from a label.
///
/// Anything that does not look like that is returned as-is (trimmed).
pub fn strip_sub_timing(label: &str) -> &str {
    match label.split_once(':') {
        Some((prefix, rest)) if prefix.trim().parse::<f64>().is_ok() => rest.trim(),
        _ => label.trim(),
    }
}

fn parse_duration(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(timestamp: f64, elapsed: f64, label: &str) -> LineRecord {
        LineRecord {
            sample: TimingSample { timestamp, elapsed },
            label: label.to_string(),
        }
    }

    #[test]
    fn plain_line() {
        assert_eq!(
            tokenize_line("000.008  000.008: --- VIM STARTING ---"),
            Ok(record(0.008, 0.008, "--- VIM STARTING ---"))
        );
    }

    #[test]
    fn sourcing_line_drops_self_time() {
        assert_eq!(
            tokenize_line("010.121  000.310  000.209: sourcing /home/u/.vimrc"),
            Ok(record(10.121, 0.31, "sourcing /home/u/.vimrc"))
        );
    }

    #[test]
    fn elapsed_with_trailing_colon_and_sub_timing() {
        assert_eq!(
            tokenize_line("0.100 2.500: sourcing /home/u/.vim/addons/foo/a.vim"),
            Ok(record(0.1, 2.5, "sourcing /home/u/.vim/addons/foo/a.vim"))
        );
    }

    #[test]
    fn fields_round_trip() {
        let line = format!("{} {} {}", 12.5_f64, 0.25_f64, "loading plugins");
        let rec = tokenize_line(&line).unwrap();
        assert_eq!(rec.sample.timestamp, 12.5);
        assert_eq!(rec.sample.elapsed, 0.25);
        assert_eq!(rec.label, "loading plugins");
    }

    #[test]
    fn label_is_trimmed() {
        assert_eq!(
            tokenize_line("   1.0   2.0   parsing arguments   ").unwrap().label,
            "parsing arguments"
        );
    }

    #[rstest]
    #[case("not a valid line at all", Rejection::BadTimestamp("not".into()))]
    #[case("1.0 abc: label", Rejection::BadElapsed("abc:".into()))]
    #[case("x 1.0 label", Rejection::BadTimestamp("x".into()))]
    #[case("1.0 2.0:: label", Rejection::BadElapsed("2.0::".into()))]
    #[case("-1.0 2.0 label", Rejection::BadTimestamp("-1.0".into()))]
    #[case("NaN 2.0 label", Rejection::BadTimestamp("NaN".into()))]
    #[case("1.0 inf label", Rejection::BadElapsed("inf".into()))]
    #[case("1.0 2.0", Rejection::MissingFields)]
    #[case("", Rejection::MissingFields)]
    #[case("times in msec", Rejection::BadTimestamp("times".into()))]
    #[case("1.0 2.0 3.0:", Rejection::EmptyLabel)]
    #[case("1.0 2.0: 0.5:   ", Rejection::EmptyLabel)]
    fn rejects(#[case] line: &str, #[case] reason: Rejection) {
        assert_eq!(tokenize_line(line), Err(reason));
    }

    #[rstest]
    #[case("000.209: sourcing /a.vim", "sourcing /a.vim")]
    #[case("  1e-3 :  spaced  ", "spaced")]
    #[case("sourcing C:/vim/init.vim", "sourcing C:/vim/init.vim")]
    #[case("--- VIM STARTED ---", "--- VIM STARTED ---")]
    #[case("abc: def", "abc: def")]
    fn sub_timing_prefix(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(strip_sub_timing(label), expected);
    }
}
