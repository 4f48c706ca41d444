//! Integration tests for time-range resolution and range-filter construction
//!
//! The fixtures freeze the clock at 2000-02-01T00:00:00.000Z and use a data
//! view whose primary time field is `date`, with `myCustomDate` available as
//! an override target.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use timefilter_core::{
    build_range_filter, calculate_bounds, get_time, resolve_absolute, DataView, Field, FixedClock,
    GetTimeOptions, TimeRange,
};

fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 2, 1, 0, 0, 0).unwrap()
}

fn data_view(fields: Vec<Field>) -> DataView {
    DataView {
        id: "test".to_string(),
        title: "test".to_string(),
        time_field_name: Some("date".to_string()),
        fields,
    }
}

#[test]
fn test_absolute_range_passes_through_unchanged() {
    let range = TimeRange::new("2000-01-01T00:00:00.000Z", "2000-02-01T00:00:00.000Z");
    assert_eq!(resolve_absolute(&range, frozen_now()), range);

    // Pass-through holds for any current instant.
    let other_now = Utc.with_ymd_and_hms(2020, 6, 15, 12, 30, 0).unwrap();
    assert_eq!(resolve_absolute(&range, other_now), range);
}

#[test]
fn test_relative_range_resolves_against_frozen_clock() {
    let range = TimeRange::new("now-60y", "now");
    assert_eq!(
        resolve_absolute(&range, frozen_now()),
        TimeRange::new("1940-02-01T00:00:00.000Z", "2000-02-01T00:00:00.000Z")
    );
}

#[test]
fn test_mixed_range_converts_only_relative_bound() {
    let range = TimeRange::new("2000-01-01T00:00:00.000Z", "now");
    assert_eq!(
        resolve_absolute(&range, frozen_now()),
        TimeRange::new("2000-01-01T00:00:00.000Z", "2000-02-01T00:00:00.000Z")
    );
}

#[test]
fn test_resolving_absolute_range_is_idempotent() {
    let range = TimeRange::new("now-60y", "now");
    let once = resolve_absolute(&range, frozen_now());
    let other_now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(resolve_absolute(&once, other_now), once);
}

#[test]
fn test_build_range_filter_in_iso_format() {
    let filter = build_range_filter(&TimeRange::new("now-60y", "now"), "date", frozen_now());
    assert_eq!(
        filter.to_json(),
        json!({
            "range": {
                "date": {
                    "gte": "1940-02-01T00:00:00.000Z",
                    "lte": "2000-02-01T00:00:00.000Z",
                    "format": "strict_date_optional_time",
                }
            }
        })
    );
}

#[test]
fn test_get_time_uses_primary_time_field() {
    let view = data_view(vec![Field::date("date")]);
    let range = TimeRange::new("now-60y", "now");
    let clock = FixedClock::new(frozen_now());

    let filter = get_time(&view, Some(&range), &GetTimeOptions::default(), &clock)
        .expect("filter for primary time field");
    assert_eq!(filter.field, "date");
    assert_eq!(filter.params.gte, "1940-02-01T00:00:00.000Z");
    assert_eq!(filter.params.lte, "2000-02-01T00:00:00.000Z");
    assert_eq!(filter.params.format, "strict_date_optional_time");
}

#[test]
fn test_get_time_for_non_primary_field() {
    let view = data_view(vec![Field::date("date"), Field::date("myCustomDate")]);
    let range = TimeRange::new("now-60y", "now");
    let clock = FixedClock::new(frozen_now());

    let filter = get_time(
        &view,
        Some(&range),
        &GetTimeOptions::with_field_name("myCustomDate"),
        &clock,
    )
    .expect("filter for overridden field");
    assert_eq!(filter.field, "myCustomDate");
    assert_eq!(filter.params.gte, "1940-02-01T00:00:00.000Z");
    assert_eq!(filter.params.lte, "2000-02-01T00:00:00.000Z");
    assert_eq!(filter.params.format, "strict_date_optional_time");
}

#[test]
fn test_get_time_without_range_is_absent() {
    let view = data_view(vec![Field::date("date")]);
    let clock = FixedClock::new(frozen_now());
    assert_eq!(get_time(&view, None, &GetTimeOptions::default(), &clock), None);
}

#[test]
fn test_get_time_without_time_field_is_absent() {
    let view = DataView {
        id: "test".to_string(),
        title: "test".to_string(),
        time_field_name: None,
        fields: vec![],
    };
    let range = TimeRange::new("now-60y", "now");
    let clock = FixedClock::new(frozen_now());
    assert_eq!(
        get_time(&view, Some(&range), &GetTimeOptions::default(), &clock),
        None
    );
}

#[test]
fn test_calculate_bounds_evaluates_both_bounds() {
    let bounds = calculate_bounds(&TimeRange::new("now-60y", "now"), frozen_now());
    assert_eq!(bounds.min, Utc.with_ymd_and_hms(1940, 2, 1, 0, 0, 0).single());
    assert_eq!(bounds.max, Some(frozen_now()));
}

#[test]
fn test_calculate_bounds_rounds_upper_bound_up() {
    let bounds = calculate_bounds(&TimeRange::new("now/d", "now/d"), frozen_now());
    assert_eq!(bounds.min, Utc.with_ymd_and_hms(2000, 2, 1, 0, 0, 0).single());
    let end_of_day = Utc.with_ymd_and_hms(2000, 2, 2, 0, 0, 0).unwrap()
        - chrono::Duration::try_milliseconds(1).unwrap();
    assert_eq!(bounds.max, Some(end_of_day));
}

#[test]
fn test_calculate_bounds_marks_unresolvable_bounds() {
    let bounds = calculate_bounds(&TimeRange::new("not-a-date", "now"), frozen_now());
    assert_eq!(bounds.min, None);
    assert_eq!(bounds.max, Some(frozen_now()));
}
