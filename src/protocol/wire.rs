//! JSON wire format for seeds and change batches
//!
//! Seed records come from the catalog as loosely-typed JSON objects:
//!
//! ```json
//! [{ "id": "b-1", "position": 3, "title": "Free coffee", "percentage": 10 }]
//! ```
//!
//! `id` may be a string or a number. Every other string-valued member
//! becomes a searchable field, and the whole record is kept as the item's
//! display payload. Change batches go out as
//! `{ "changes": [{ "id": "b-1", "newPosition": 2 }] }`.

use crate::error::{ReorderError, Result};
use crate::order::{Change, OrderedItem};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Body of a persist request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBatch {
    pub changes: Vec<Change>,
}

/// Decode a JSON array of seed records
pub fn decode_seed(json: &str) -> Result<Vec<OrderedItem>> {
    let value: JsonValue = serde_json::from_str(json)?;
    seed_from_value(value)
}

/// Decode seed records from an already-parsed JSON value
pub fn seed_from_value(value: JsonValue) -> Result<Vec<OrderedItem>> {
    match value {
        JsonValue::Array(records) => records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record_to_item(index, record))
            .collect(),
        other => Err(ReorderError::Protocol(format!(
            "Seed must be a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn record_to_item(index: usize, record: JsonValue) -> Result<OrderedItem> {
    let object = record.as_object().ok_or_else(|| {
        ReorderError::Protocol(format!("Seed record {} is not an object", index))
    })?;

    let id = match object.get("id") {
        Some(JsonValue::String(s)) if !s.is_empty() => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        _ => {
            return Err(ReorderError::Protocol(format!(
                "Seed record {} has no usable id",
                index
            )))
        }
    };

    let position = match object.get("position") {
        Some(JsonValue::Number(n)) => n.as_i64(),
        Some(JsonValue::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        ReorderError::Protocol(format!("Seed record {} has no integer position", id))
    })?;

    let mut item = OrderedItem::new(id, position);
    for (name, value) in object {
        if name == "id" || name == "position" {
            continue;
        }
        if let JsonValue::String(text) = value {
            item.fields.insert(name.clone(), text.clone());
        }
    }
    item.payload = record;
    Ok(item)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Encode the body of a persist request
pub fn encode_changes(changes: &[Change]) -> Result<String> {
    let batch = ChangeBatch {
        changes: changes.to_vec(),
    };
    Ok(serde_json::to_string(&batch)?)
}

/// Decode the body of a persist request
pub fn decode_changes(json: &str) -> Result<Vec<Change>> {
    let batch: ChangeBatch = serde_json::from_str(json)?;
    Ok(batch.changes)
}
