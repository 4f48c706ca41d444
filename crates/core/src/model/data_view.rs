use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Date,
    DateNanos,
    Number,
    String,
    Boolean,
}

/// A field descriptor from a data view's field catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub aggregatable: bool,
    #[serde(default)]
    pub filterable: bool,
}

impl Field {
    /// A searchable, aggregatable, filterable date field.
    pub fn date(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Date,
            searchable: true,
            aggregatable: true,
            filterable: true,
        }
    }

    pub fn is_date_compatible(&self) -> bool {
        matches!(self.field_type, FieldType::Date | FieldType::DateNanos)
    }
}

/// A queryable data source: a field catalog plus an optional designated
/// primary time field. Read-only during resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataView {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub time_field_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl DataView {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The descriptor of the designated primary time field, when the catalog
    /// both names one and carries it.
    pub fn primary_time_field(&self) -> Option<&Field> {
        self.time_field_name
            .as_deref()
            .and_then(|name| self.field(name))
    }
}
