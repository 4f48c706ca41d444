//! Time-range resolution and range-filter construction
//!
//! Converts a [`TimeRange`] whose bounds may be date-math expressions into
//! absolute timestamps, and wraps the result into a [`RangeFilter`] targeting
//! a date field of a [`DataView`]. Every function is a pure transformation of
//! its inputs; the current instant is always passed in explicitly.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::datemath;
use crate::model::{DataView, RangeFilter, TimeRange, TimeRangeBounds};

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

/// Caller-supplied overrides for [`get_time`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTimeOptions {
    /// Target field override. When absent the data view's primary time field
    /// is used.
    pub field_name: Option<String>,
}

impl GetTimeOptions {
    pub fn with_field_name(name: impl Into<String>) -> Self {
        Self {
            field_name: Some(name.into()),
        }
    }
}

/// Resolve both bounds of a time range to absolute timestamps.
///
/// Now-anchored bounds are evaluated against `now` and serialized as ISO 8601
/// UTC with millisecond precision. Any other bound, including malformed date
/// math, passes through byte-for-byte, so already-absolute ranges round-trip
/// unchanged.
pub fn resolve_absolute(range: &TimeRange, now: DateTime<Utc>) -> TimeRange {
    TimeRange {
        from: resolve_bound(&range.from, now, false),
        to: resolve_bound(&range.to, now, true),
    }
}

fn resolve_bound(expression: &str, now: DateTime<Utc>, round_up: bool) -> String {
    match datemath::parse_relative(expression, now, round_up) {
        Some(instant) => format_iso_millis(instant),
        None => expression.to_string(),
    }
}

/// Build a range filter for `field_name` from the resolved bounds.
///
/// The field is not validated against any catalog; targeting an existing
/// date field is the caller's responsibility.
pub fn build_range_filter(range: &TimeRange, field_name: &str, now: DateTime<Utc>) -> RangeFilter {
    let absolute = resolve_absolute(range, now);
    RangeFilter::new(field_name, absolute.from, absolute.to)
}

/// Build the range filter for a data view.
///
/// Returns `None` when no time range is supplied, or when neither the
/// options nor the data view designate a target field. Absence of a filter
/// is a valid outcome, distinct from a filter covering the full range.
pub fn get_time(
    data_view: &DataView,
    time_range: Option<&TimeRange>,
    options: &GetTimeOptions,
    clock: &dyn Clock,
) -> Option<RangeFilter> {
    let range = time_range?;
    let field_name = options
        .field_name
        .as_deref()
        .or(data_view.time_field_name.as_deref());
    let Some(field_name) = field_name else {
        debug!(data_view = %data_view.id, "no time field available, skipping range filter");
        return None;
    };

    debug!(
        data_view = %data_view.id,
        field = field_name,
        from = %range.from,
        to = %range.to,
        "building range filter"
    );
    Some(build_range_filter(range, field_name, clock.now()))
}

/// Evaluate both bounds to instants, rounding the upper bound up.
///
/// Unlike [`resolve_absolute`], absolute bounds are evaluated too. A bound
/// that cannot be evaluated is reported as `None`, not as an error.
pub fn calculate_bounds(range: &TimeRange, now: DateTime<Utc>) -> TimeRangeBounds {
    TimeRangeBounds {
        min: datemath::parse(&range.from, now).ok(),
        max: datemath::parse_with_round_up(&range.to, now, true).ok(),
    }
}

fn format_iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
