//! Date-math expression parsing and evaluation
//!
//! This module resolves expressions such as `now-60y`, `now/d` or
//! `2014-05-13||+1M` into absolute UTC instants. Parsing produces a small
//! AST ([`DateMathExpr`]); evaluation applies the operation chain against an
//! injected current instant, so results are deterministic under test.
//!
//! Shifts by years and months are calendar-aware (day-of-month is clamped at
//! month ends); weeks and smaller units are fixed-length. Rounding truncates
//! to the start of the unit, or with `round_up` resolves to the last
//! millisecond of the unit. Weeks start on Sunday.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, TimeZone, Timelike, Utc};

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{Anchor, DateMathExpr, Operation, Unit};
pub use error::ParseError;
pub use parser::parse_expression;

/// Parse and evaluate an expression, rounding down.
pub fn parse(expression: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ParseError> {
    parse_with_round_up(expression, now, false)
}

/// Parse and evaluate an expression with explicit rounding direction.
///
/// `round_up` only affects `/unit` operations; upper bounds of closed
/// intervals are evaluated with `round_up = true` so that `now/d` covers the
/// whole day.
pub fn parse_with_round_up(
    expression: &str,
    now: DateTime<Utc>,
    round_up: bool,
) -> Result<DateTime<Utc>, ParseError> {
    let expr = parse_expression(expression)?;
    evaluate(&expr, expression, now, round_up)
}

/// Evaluate an expression only if it is anchored to `now`.
///
/// Returns `None` for absolute anchors, malformed expressions, and
/// out-of-range results. Callers that treat non-relative input as opaque
/// pass-through values use this seam instead of [`parse`].
pub fn parse_relative(expression: &str, now: DateTime<Utc>, round_up: bool) -> Option<DateTime<Utc>> {
    let expr = parse_expression(expression).ok()?;
    if !expr.is_relative() {
        return None;
    }
    evaluate(&expr, expression, now, round_up).ok()
}

fn evaluate(
    expr: &DateMathExpr,
    source: &str,
    now: DateTime<Utc>,
    round_up: bool,
) -> Result<DateTime<Utc>, ParseError> {
    let mut instant = match &expr.anchor {
        Anchor::Now => now,
        Anchor::Absolute(value) => parse_anchor(value)?,
    };

    for operation in &expr.operations {
        instant = match *operation {
            Operation::Shift {
                negative,
                amount,
                unit,
            } => shift(instant, negative, amount, unit),
            Operation::Round { unit } => round(instant, unit, round_up),
        }
        .ok_or_else(|| ParseError::OutOfRange {
            expression: source.to_string(),
        })?;
    }

    Ok(instant)
}

/// Parse an absolute anchor date. Accepts RFC 3339, naive ISO 8601
/// timestamps (taken as UTC) and plain dates (midnight UTC).
pub fn parse_anchor(value: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&parsed));
        }
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(ParseError::InvalidDate {
        value: value.to_string(),
    })
}

fn shift(instant: DateTime<Utc>, negative: bool, amount: u32, unit: Unit) -> Option<DateTime<Utc>> {
    match unit {
        Unit::Year => shift_months(instant, negative, amount.checked_mul(12)?),
        Unit::Month => shift_months(instant, negative, amount),
        Unit::Week => shift_duration(instant, negative, Duration::try_weeks(i64::from(amount))?),
        Unit::Day => shift_duration(instant, negative, Duration::try_days(i64::from(amount))?),
        Unit::Hour => shift_duration(instant, negative, Duration::try_hours(i64::from(amount))?),
        Unit::Minute => shift_duration(instant, negative, Duration::try_minutes(i64::from(amount))?),
        Unit::Second => shift_duration(instant, negative, Duration::try_seconds(i64::from(amount))?),
    }
}

fn shift_months(instant: DateTime<Utc>, negative: bool, months: u32) -> Option<DateTime<Utc>> {
    if negative {
        instant.checked_sub_months(Months::new(months))
    } else {
        instant.checked_add_months(Months::new(months))
    }
}

fn shift_duration(
    instant: DateTime<Utc>,
    negative: bool,
    delta: Duration,
) -> Option<DateTime<Utc>> {
    if negative {
        instant.checked_sub_signed(delta)
    } else {
        instant.checked_add_signed(delta)
    }
}

fn round(instant: DateTime<Utc>, unit: Unit, round_up: bool) -> Option<DateTime<Utc>> {
    let start = truncate(instant, unit)?;
    if !round_up {
        return Some(start);
    }
    // Last millisecond of the unit, so closed upper bounds stay inclusive.
    let next = shift(start, false, 1, unit)?;
    next.checked_sub_signed(Duration::try_milliseconds(1)?)
}

fn truncate(instant: DateTime<Utc>, unit: Unit) -> Option<DateTime<Utc>> {
    let datetime = instant.naive_utc();
    let date = datetime.date();
    let truncated = match unit {
        Unit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?.and_hms_opt(0, 0, 0)?,
        Unit::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?.and_hms_opt(0, 0, 0)?,
        Unit::Week => date
            .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))?
            .and_hms_opt(0, 0, 0)?,
        Unit::Day => date.and_hms_opt(0, 0, 0)?,
        Unit::Hour => date.and_hms_opt(datetime.hour(), 0, 0)?,
        Unit::Minute => date.and_hms_opt(datetime.hour(), datetime.minute(), 0)?,
        Unit::Second => date.and_hms_opt(datetime.hour(), datetime.minute(), datetime.second())?,
    };
    Some(Utc.from_utc_datetime(&truncated))
}
