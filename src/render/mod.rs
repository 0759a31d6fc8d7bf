//! Report rendering: the averaged actions plus the per-addon breakdown.

pub mod json;
pub mod text;

pub use json::render_json_report;
pub use text::render_text_report;

use crate::model::{AddonTree, ParsedLog, ProfileError};

/// Everything a report shows, with the total time already required.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub log: &'a ParsedLog,
    pub addons: &'a AddonTree,
    pub total_time: f64,
}

impl<'a> Report<'a> {
    pub fn new(log: &'a ParsedLog, addons: &'a AddonTree) -> Result<Self, ProfileError> {
        Ok(Self {
            log,
            addons,
            total_time: log.total()?,
        })
    }
}
