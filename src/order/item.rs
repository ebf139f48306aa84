//! OrderedItem: a stably-identified record with an integer position
//!
//! Only `id` and `position` matter to the engine. Searchable fields feed the
//! view projector; the display payload is carried through untouched.

use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single record in a priority-ordered collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    /// Stable, globally unique identifier (never changes)
    pub id: ItemId,

    /// Sort key; strictly increasing along the working order at rest
    pub position: i64,

    /// Text fields the view projector may match against
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// Opaque display data (title, image, date range, status, ...)
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl OrderedItem {
    /// Create an item with no searchable fields and an empty payload
    pub fn new(id: impl Into<ItemId>, position: i64) -> Self {
        Self {
            id: id.into(),
            position,
            fields: BTreeMap::new(),
            payload: serde_json::Value::Null,
        }
    }

    /// Builder-style helper to attach a searchable field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a searchable field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
