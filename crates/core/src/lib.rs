pub mod datemath;
pub mod model;
pub mod timefilter;

pub use datemath::ParseError;
pub use model::{
    DataView, Field, FieldType, RangeFilter, RangeFilterParams, TimeRange, TimeRangeBounds,
    STRICT_DATE_OPTIONAL_TIME,
};
pub use timefilter::{
    build_range_filter, calculate_bounds, get_time, resolve_absolute, Clock, FixedClock,
    GetTimeOptions, SystemClock,
};
