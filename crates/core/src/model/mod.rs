pub mod data_view;
pub mod filter;
pub mod time_range;

pub use data_view::{DataView, Field, FieldType};
pub use filter::{RangeFilter, RangeFilterParams, STRICT_DATE_OPTIONAL_TIME};
pub use time_range::{TimeRange, TimeRangeBounds};
