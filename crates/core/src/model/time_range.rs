use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A caller-supplied time range. Each bound is either an absolute ISO 8601
/// timestamp or a date-math expression such as `now-60y`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Evaluated bounds of a time range. A bound that could not be resolved to
/// an instant is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRangeBounds {
    pub min: Option<DateTime<Utc>>,
    pub max: Option<DateTime<Utc>>,
}
