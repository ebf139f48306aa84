//! OrderStore: the working order plus the session snapshot it is diffed against
//!
//! # Invariants
//!
//! - The working order is sorted strictly ascending by `position`
//! - No two items share a position at the end of any operation
//! - The set of ids never changes after [`OrderStore::load`]
//!
//! The snapshot is taken on load and only moves forward when a save succeeds.

use super::item::OrderedItem;
use crate::error::{ReorderError, Result};
use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Baseline `id -> position` map captured when the session opened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    positions: HashMap<ItemId, i64>,
}

impl SessionSnapshot {
    /// Capture the positions of `items`
    pub fn capture(items: &[OrderedItem]) -> Self {
        Self {
            positions: items
                .iter()
                .map(|item| (item.id.clone(), item.position))
                .collect(),
        }
    }

    /// Persisted position of `id`, if known
    pub fn get(&self, id: &str) -> Option<i64> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(id, position)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, i64)> {
        self.positions.iter().map(|(id, pos)| (id, *pos))
    }

    /// Record a persisted position for an id already in the snapshot
    ///
    /// Returns false for ids the snapshot never contained.
    pub(crate) fn advance(&mut self, id: &str, position: i64) -> bool {
        match self.positions.get_mut(id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }
}

/// Full, unfiltered collection being edited in one reorder session
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    items: Vec<OrderedItem>,
    snapshot: SessionSnapshot,
}

impl OrderStore {
    /// Seed the working order and take the session snapshot
    ///
    /// Items may arrive in any order; they are sorted by position. Seeds with
    /// a repeated id or a repeated position are rejected because the at-rest
    /// invariant could not hold.
    pub fn load(items: Vec<OrderedItem>) -> Result<Self> {
        let mut items = items;
        items.sort_by_key(|item| item.position);

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ReorderError::DuplicateId(item.id.clone()));
            }
        }

        if let Some(pair) = items.windows(2).find(|w| w[0].position == w[1].position) {
            return Err(ReorderError::DuplicatePosition {
                position: pair[0].position,
                first: pair[0].id.clone(),
                second: pair[1].id.clone(),
            });
        }

        let snapshot = SessionSnapshot::capture(&items);
        Ok(Self { items, snapshot })
    }

    /// The working order, sorted by position
    pub fn current_order(&self) -> &[OrderedItem] {
        &self.items
    }

    /// The baseline the diff engine compares against
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Global index of `id` in the working order
    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ReorderError::UnknownId(id.to_string()))
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&OrderedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable access for the reorder operations
    ///
    /// Callers must leave the vector sorted with distinct positions.
    pub(crate) fn items_mut(&mut self) -> &mut Vec<OrderedItem> {
        &mut self.items
    }

    pub(crate) fn snapshot_mut(&mut self) -> &mut SessionSnapshot {
        &mut self.snapshot
    }

    /// Check the at-rest invariant (strictly ascending positions)
    pub fn is_well_ordered(&self) -> bool {
        self.items.windows(2).all(|w| w[0].position < w[1].position)
    }
}
