//! Transient set of item ids picked for a batch move

use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ids toggled by the operator ahead of a batch move
///
/// Membership only; the relative order of a moved block comes from the
/// working order, not from selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id; returns false if it was already selected
    pub fn add(&mut self, id: impl Into<ItemId>) -> bool {
        self.ids.insert(id.into())
    }

    /// Remove an id; returns false if it was not selected
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip membership and return the new state
    pub fn toggle(&mut self, id: impl Into<ItemId>) -> bool {
        let id = id.into();
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }
}

impl<S: Into<ItemId>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut selection = SelectionSet::new();
        assert!(selection.add("a"));
        assert!(!selection.add("a"));
        assert!(selection.contains("a"));
        assert_eq!(selection.len(), 1);

        assert!(selection.remove("a"));
        assert!(!selection.remove("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("a"));
        assert!(selection.contains("a"));
        assert!(!selection.toggle("a"));
        assert!(!selection.contains("a"));
    }

    #[test]
    fn test_clear() {
        let mut selection: SelectionSet = ["a", "b", "c"].into_iter().collect();
        assert_eq!(selection.len(), 3);
        selection.clear();
        assert!(selection.is_empty());
    }
}
