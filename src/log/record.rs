use serde::Serialize;

/// One timing observation for an action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingSample {
    /// Milliseconds since process start when the action was logged.
    pub timestamp: f64,
    /// Milliseconds attributed to the action itself.
    pub elapsed: f64,
}

/// A single accepted line from a `--startuptime` log.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub sample: TimingSample,
    pub label: String,
}
