use std::collections::BTreeMap;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed date format tag carried by every range filter.
pub const STRICT_DATE_OPTIONAL_TIME: &str = "strict_date_optional_time";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeFilterParams {
    pub gte: String,
    pub lte: String,
    pub format: String,
}

/// A range-query fragment restricting one date field to the closed interval
/// `[gte, lte]`.
///
/// Wire shape: `{"range": {"<field>": {"gte": ..., "lte": ..., "format": ...}}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFilter {
    pub field: String,
    pub params: RangeFilterParams,
}

#[derive(Serialize, Deserialize)]
struct RangeFilterWire {
    range: BTreeMap<String, RangeFilterParams>,
}

impl RangeFilter {
    pub fn new(field: impl Into<String>, gte: impl Into<String>, lte: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            params: RangeFilterParams {
                gte: gte.into(),
                lte: lte.into(),
                format: STRICT_DATE_OPTIONAL_TIME.to_string(),
            },
        }
    }

    /// The filter as a plain JSON value in the downstream query wire shape.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for RangeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut range = BTreeMap::new();
        range.insert(self.field.clone(), self.params.clone());
        RangeFilterWire { range }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RangeFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = RangeFilterWire::deserialize(deserializer)?;
        let mut entries = wire.range.into_iter();
        let (field, params) = entries
            .next()
            .ok_or_else(|| D::Error::custom("range filter requires exactly one field"))?;
        if entries.next().is_some() {
            return Err(D::Error::custom("range filter requires exactly one field"));
        }
        Ok(Self { field, params })
    }
}
