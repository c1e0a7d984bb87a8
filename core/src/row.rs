//! Row structure.
//!
//! A row is a stored record: its identifier plus the field values the store
//! returned for it. CULL never interprets fields beyond foreign-key lookups.

use crate::{RowId, Value};
use std::collections::HashMap;

/// Field values of a row, keyed by column name.
pub type Fields = HashMap<String, Value>;

/// A row fetched from (or destined for) the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Unique identifier for this row.
    pub id: RowId,
    /// Field values.
    pub fields: Fields,
}

impl Row {
    /// Create a new row with the given fields.
    pub fn new(id: RowId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field value.
    pub fn set(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }

    /// Get a foreign-key field as a row ID.
    ///
    /// Returns None when the field is absent or null.
    pub fn fk(&self, name: &str) -> Option<RowId> {
        self.fields.get(name).and_then(Value::as_id)
    }
}
