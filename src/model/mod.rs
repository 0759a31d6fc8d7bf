//! Aggregation model: fold timing records of all runs into per-action averages.

pub mod addons;

pub use addons::{AddonEntry, AddonFile, AddonTree, AddonsDir, group};

use crate::log::{LineRecord, TimingSample, tokenize_runs};
use indexmap::IndexMap;
use log::info;
use serde::Serialize;
use thiserror::Error;

/// Label Vim logs once startup has finished; its timestamp is the total time.
pub const TOTAL_LABEL: &str = "--- VIM STARTED ---";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("no `{}` line found; the log holds no completed startup", TOTAL_LABEL)]
    MissingTotal,
}

/// Every sample observed for one action label, in run order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSamples {
    pub samples: Vec<TimingSample>,
}

impl ActionSamples {
    /// Mean of the samples, or `None` when there are none.
    pub fn average(&self) -> Option<ActionAverage> {
        if self.samples.is_empty() {
            return None;
        }
        let n = self.samples.len() as f64;
        let (time_sum, elapsed_sum) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(t, e), s| (t + s.timestamp, e + s.elapsed));
        Some(ActionAverage {
            time_avg: time_sum / n,
            elapsed_avg: elapsed_sum / n,
            samples: self.samples.len(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionAverage {
    pub time_avg: f64,
    pub elapsed_avg: f64,
    /// Number of samples the averages were taken over.
    pub samples: usize,
}

/// Averaged actions keyed by label, in first-seen order.
pub type ActionMap = IndexMap<String, ActionAverage>;

/// Accumulates samples per label across any number of runs or logs.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    actions: IndexMap<String, ActionSamples>,
    runs: usize,
    rejected: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: LineRecord) {
        self.actions
            .entry(record.label)
            .or_default()
            .samples
            .push(record.sample);
    }

    /// Segment, tokenize and accumulate one log's lines.
    pub fn add_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        let parsed = tokenize_runs(lines);
        self.runs += parsed.runs;
        self.rejected += parsed.rejected;
        for record in parsed.records {
            self.add(record);
        }
    }

    /// Fold another aggregator's samples into this one.
    pub fn merge(&mut self, other: Aggregator) {
        for (label, samples) in other.actions {
            self.actions
                .entry(label)
                .or_default()
                .samples
                .extend(samples.samples);
        }
        self.runs += other.runs;
        self.rejected += other.rejected;
    }

    /// Samples collected so far for `label`.
    pub fn samples(&self, label: &str) -> Option<&ActionSamples> {
        self.actions.get(label)
    }

    /// Average every action and split off the total-time marker.
    pub fn finish(self) -> ParsedLog {
        let mut actions = ActionMap::with_capacity(self.actions.len());
        let mut total_time = None;

        for (label, samples) in self.actions {
            let Some(avg) = samples.average() else {
                continue;
            };
            if label == TOTAL_LABEL {
                total_time = Some(avg.time_avg);
            } else {
                actions.insert(label, avg);
            }
        }

        ParsedLog {
            actions,
            total_time,
            runs: self.runs,
            rejected: self.rejected,
        }
    }
}

/// Flat per-action results of one or more logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLog {
    pub actions: ActionMap,
    /// Average timestamp of [`TOTAL_LABEL`]; `None` if it never appeared.
    pub total_time: Option<f64>,
    pub runs: usize,
    pub rejected: usize,
}

impl ParsedLog {
    pub fn total(&self) -> Result<f64, ProfileError> {
        self.total_time.ok_or(ProfileError::MissingTotal)
    }

    /// Actions ascending by elapsed average; ties keep first-seen order.
    pub fn sorted_by_elapsed(&self) -> Vec<(&str, &ActionAverage)> {
        let mut out: Vec<(&str, &ActionAverage)> =
            self.actions.iter().map(|(k, v)| (k.as_str(), v)).collect();
        out.sort_by(|a, b| a.1.elapsed_avg.total_cmp(&b.1.elapsed_avg));
        out
    }
}

/// Parse a whole log and require the total-time marker.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<ParsedLog, ProfileError> {
    let mut agg = Aggregator::new();
    agg.add_lines(lines);
    let parsed = agg.finish();
    parsed.total()?;
    info!(
        "parsed {} runs: {} actions, {} lines skipped",
        parsed.runs,
        parsed.actions.len(),
        parsed.rejected
    );
    Ok(parsed)
}

pub fn parse_str(text: &str) -> Result<ParsedLog, ProfileError> {
    let lines: Vec<&str> = text.lines().collect();
    parse(&lines)
}
