//! Diff engine: working order vs. session snapshot
//!
//! Produces the minimal `{id, newPosition}` list for a save. An empty list is
//! a real outcome (nothing to persist), distinct from any error.

use super::item::OrderedItem;
use super::store::{OrderStore, SessionSnapshot};
use crate::error::{ReorderError, Result};
use crate::ItemId;
use serde::{Deserialize, Serialize};

/// One position update to send to the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub id: ItemId,
    pub new_position: i64,
}

impl Change {
    pub fn new(id: impl Into<ItemId>, new_position: i64) -> Self {
        Self {
            id: id.into(),
            new_position,
        }
    }
}

/// Compare `working` against `snapshot`
///
/// Emits a [`Change`] for every item whose position differs, in working-order
/// sequence. Both sides must hold the same ids: an id only in the snapshot
/// yields [`ReorderError::MissingFromWorkingOrder`], an id only in the
/// working order yields [`ReorderError::UnknownId`].
pub fn diff(snapshot: &SessionSnapshot, working: &[OrderedItem]) -> Result<Vec<Change>> {
    let mut changes = Vec::new();

    for item in working {
        let persisted = snapshot
            .get(&item.id)
            .ok_or_else(|| ReorderError::UnknownId(item.id.clone()))?;
        if persisted != item.position {
            changes.push(Change::new(item.id.clone(), item.position));
        }
    }

    if snapshot.len() != working.len() {
        if let Some((missing, _)) = snapshot
            .iter()
            .find(|(id, _)| !working.iter().any(|item| &item.id == *id))
        {
            return Err(ReorderError::MissingFromWorkingOrder(missing.clone()));
        }
    }

    Ok(changes)
}

impl OrderStore {
    /// Changes since the last successful save (or since load)
    pub fn pending_changes(&self) -> Result<Vec<Change>> {
        diff(self.snapshot(), self.current_order())
    }
}
