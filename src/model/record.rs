//! Lead records and the record store
//!
//! A lead record is kept exactly as it came out of the source document.
//! Missing-value normalization happens in [`LeadRecord::field`] and nowhere else.

use serde_json::{Map, Value};

use crate::logic::navigation::{self, Direction};

/// Placeholder shown for absent, null or empty fields
pub const NOT_AVAILABLE: &str = "Not available";

/// A field value after missing-value normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Present(String),
    Missing,
}

impl FieldValue {
    pub fn is_available(&self) -> bool {
        matches!(self, FieldValue::Present(_))
    }

    /// Text to display: the value itself, or the placeholder
    pub fn display(&self) -> &str {
        match self {
            FieldValue::Present(text) => text,
            FieldValue::Missing => NOT_AVAILABLE,
        }
    }
}

/// One business entry, keyed by source field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadRecord {
    fields: Map<String, Value>,
}

impl LeadRecord {
    /// Build a record from one element of a source array.
    ///
    /// Elements that are not JSON objects become empty records, so every
    /// field reads as missing.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Look up a field, treating absent, null and "" as missing.
    ///
    /// # Examples
    /// ```
    /// use leadview::model::record::{FieldValue, LeadRecord};
    /// use serde_json::json;
    ///
    /// let record = LeadRecord::from_value(json!({"title": "Acme", "phone": "", "totalScore": 4.5}));
    /// assert_eq!(record.field("title"), FieldValue::Present("Acme".to_string()));
    /// assert_eq!(record.field("phone"), FieldValue::Missing);
    /// assert_eq!(record.field("city"), FieldValue::Missing);
    /// assert_eq!(record.field("totalScore").display(), "4.5");
    /// ```
    pub fn field(&self, source: &str) -> FieldValue {
        match self.fields.get(source) {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::String(text)) if text.is_empty() => FieldValue::Missing,
            Some(Value::String(text)) => FieldValue::Present(text.clone()),
            Some(other) => FieldValue::Present(other.to_string()),
        }
    }
}

/// Merged, read-only list of records plus the viewing cursor.
///
/// Never empty: construction fails for an empty list, so `index < len()`
/// always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<LeadRecord>,
    index: usize,
}

impl RecordStore {
    /// Returns `None` when there are no records
    pub fn new(records: Vec<LeadRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self { records, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; pairs with `len`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn records(&self) -> &[LeadRecord] {
        &self.records
    }

    pub fn current(&self) -> &LeadRecord {
        &self.records[self.index]
    }

    /// Move the cursor one step. Returns false (and leaves the cursor alone)
    /// at a boundary.
    pub fn step(&mut self, direction: Direction) -> bool {
        match navigation::step_index(self.index, self.records.len(), direction) {
            Some(next) => {
                self.index = next;
                true
            }
            None => false,
        }
    }
}
