//! Reorder operations on the working order
//!
//! Two renumbering policies live here and they are deliberately different:
//!
//! - **Bounded rotation** ([`OrderStore::move_item`] and everything built on
//!   it): only the index range between source and destination is renumbered,
//!   reusing the position values already in that range. Items outside the
//!   range keep their positions, so the diff stays at most `|a - b| + 1`.
//! - **Full renumber** ([`OrderStore::batch_move`]): the whole collection is
//!   reassigned `1..=N` after a block move. The diff may touch every item.
//!
//! Unifying the two would change how many rows the backend writes per save.
//!
//! All operations are addressed by id. An id that is not in the working order
//! is an error; an out-of-range target is absorbed and reported as
//! [`MoveOutcome::Rejected`].

use super::selection::SelectionSet;
use super::store::OrderStore;
use crate::error::{ReorderError, Result};
use serde::{Deserialize, Serialize};

/// What a reorder operation did to the working order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveOutcome {
    /// A single item went from one global index to another
    Moved { from: usize, to: usize },

    /// A block of `count` items now starts at global index `at`
    BlockMoved { count: usize, at: usize },

    /// Valid request that left the order as it was
    Unchanged,

    /// Target outside the collection; nothing was touched
    Rejected,
}

impl MoveOutcome {
    /// True if the working order was mutated
    pub fn is_change(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::BlockMoved { .. })
    }
}

impl OrderStore {
    /// Move `id` to global index `target_index` (drag-and-drop)
    ///
    /// Uses bounded rotation: with `lo..=hi` the span between source and
    /// target, the items in that span are rotated by one and take the
    /// positions `base, base + 1, ...` where `base` is the position that sat
    /// at `lo` before the move. Because positions are strictly increasing,
    /// `base + (hi - lo)` never exceeds the old position at `hi`, so the
    /// result stays sorted and distinct.
    ///
    /// # Example
    ///
    /// ```
    /// use reorder_core::order::{OrderStore, OrderedItem};
    ///
    /// let items = ["A", "B", "C", "D", "E"]
    ///     .iter()
    ///     .zip(1..)
    ///     .map(|(id, pos)| OrderedItem::new(*id, pos))
    ///     .collect();
    /// let mut store = OrderStore::load(items).unwrap();
    ///
    /// store.move_item("D", 1).unwrap();
    ///
    /// let order: Vec<_> = store
    ///     .current_order()
    ///     .iter()
    ///     .map(|i| (i.id.as_str(), i.position))
    ///     .collect();
    /// assert_eq!(order, vec![("A", 1), ("D", 2), ("B", 3), ("C", 4), ("E", 5)]);
    /// ```
    pub fn move_item(&mut self, id: &str, target_index: usize) -> Result<MoveOutcome> {
        let source = self.index_of(id)?;
        let len = self.len();

        if target_index >= len {
            tracing::warn!(item = id, target_index, len, "move target out of range");
            return Ok(MoveOutcome::Rejected);
        }
        if source == target_index {
            return Ok(MoveOutcome::Unchanged);
        }

        let (lo, hi) = (source.min(target_index), source.max(target_index));
        let items = self.items_mut();
        let base = items[lo].position;

        let span = &mut items[lo..=hi];
        if source < target_index {
            span.rotate_left(1);
        } else {
            span.rotate_right(1);
        }
        for (offset, item) in span.iter_mut().enumerate() {
            item.position = base + offset as i64;
        }

        tracing::debug!(item = id, from = source, to = target_index, "moved item");
        Ok(MoveOutcome::Moved {
            from: source,
            to: target_index,
        })
    }

    /// Move `id` to the front of the collection
    pub fn move_to_top(&mut self, id: &str) -> Result<MoveOutcome> {
        self.move_item(id, 0)
    }

    /// Move `id` to the end of the collection
    pub fn move_to_bottom(&mut self, id: &str) -> Result<MoveOutcome> {
        let last = self.len().saturating_sub(1);
        self.move_item(id, last)
    }

    /// Numeric entry: put `id` at 1-based `target_position`
    ///
    /// Values outside `1..=len` are rejected without touching the order.
    pub fn move_to_position(&mut self, id: &str, target_position: i64) -> Result<MoveOutcome> {
        // Unknown ids fail before the range check.
        self.index_of(id)?;

        let len = self.len() as i64;
        if !(1..=len).contains(&target_position) {
            tracing::warn!(item = id, target_position, len, "position entry out of range");
            return Ok(MoveOutcome::Rejected);
        }
        self.move_item(id, (target_position - 1) as usize)
    }

    /// Drop `id` onto the slot currently held by `anchor_id`
    ///
    /// Lets a filtered or paginated view address the drop target by id, so
    /// the global index is resolved here and never taken from the view.
    pub fn move_onto(&mut self, id: &str, anchor_id: &str) -> Result<MoveOutcome> {
        self.index_of(id)?;
        let target = self.index_of(anchor_id)?;
        self.move_item(id, target)
    }

    /// Move every selected item as one contiguous block
    ///
    /// The block keeps its working-order relative order and is inserted into
    /// the unselected remainder at `clamp(target_position - 1, 0, remaining)`.
    /// Uses full renumber: afterwards positions are exactly `1..=N`.
    /// The selection is cleared whenever the call succeeds.
    pub fn batch_move(
        &mut self,
        selection: &mut SelectionSet,
        target_position: i64,
    ) -> Result<MoveOutcome> {
        if selection.is_empty() {
            return Ok(MoveOutcome::Unchanged);
        }
        if let Some(unknown) = selection.iter().find(|id| self.get(id).is_none()) {
            return Err(ReorderError::UnknownId(unknown.clone()));
        }

        let items = self.items_mut();
        let (selected, remaining): (Vec<usize>, Vec<usize>) =
            (0..items.len()).partition(|&index| selection.contains(&items[index].id));

        let insert_at = target_position
            .saturating_sub(1)
            .clamp(0, remaining.len() as i64) as usize;
        let count = selected.len();

        let mut new_order = Vec::with_capacity(items.len());
        new_order.extend_from_slice(&remaining[..insert_at]);
        new_order.extend_from_slice(&selected);
        new_order.extend_from_slice(&remaining[insert_at..]);

        selection.clear();

        if new_order.iter().enumerate().all(|(new, &old)| new == old) {
            return Ok(MoveOutcome::Unchanged);
        }

        let mut rank = vec![0usize; new_order.len()];
        for (new, &old) in new_order.iter().enumerate() {
            rank[old] = new;
        }
        let mut keyed: Vec<_> = std::mem::take(items)
            .into_iter()
            .enumerate()
            .map(|(old, item)| (rank[old], item))
            .collect();
        keyed.sort_by_key(|(new, _)| *new);

        *items = keyed
            .into_iter()
            .zip(1..)
            .map(|((_, mut item), position)| {
                item.position = position;
                item
            })
            .collect();

        tracing::debug!(count, at = insert_at, "moved block");
        Ok(MoveOutcome::BlockMoved {
            count,
            at: insert_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderedItem;

    fn store(spec: &[(&str, i64)]) -> OrderStore {
        OrderStore::load(
            spec.iter()
                .map(|(id, pos)| OrderedItem::new(*id, *pos))
                .collect(),
        )
        .unwrap()
    }

    fn layout(store: &OrderStore) -> Vec<(String, i64)> {
        store
            .current_order()
            .iter()
            .map(|i| (i.id.clone(), i.position))
            .collect()
    }

    fn expect(spec: &[(&str, i64)]) -> Vec<(String, i64)> {
        spec.iter().map(|(id, pos)| (id.to_string(), *pos)).collect()
    }

    #[test]
    fn test_move_up_bounded_rotation() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5)]);

        let outcome = s.move_item("D", 1).unwrap();

        assert_eq!(outcome, MoveOutcome::Moved { from: 3, to: 1 });
        assert_eq!(
            layout(&s),
            expect(&[("A", 1), ("D", 2), ("B", 3), ("C", 4), ("E", 5)])
        );
    }

    #[test]
    fn test_move_down_bounded_rotation() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5)]);

        s.move_item("B", 3).unwrap();

        assert_eq!(
            layout(&s),
            expect(&[("A", 1), ("C", 2), ("D", 3), ("B", 4), ("E", 5)])
        );
    }

    #[test]
    fn test_move_with_gapped_positions() {
        let mut s = store(&[("A", 10), ("B", 20), ("C", 30), ("D", 40)]);

        s.move_item("D", 1).unwrap();

        // Span starts at B's old position 20; A keeps 10.
        assert_eq!(
            layout(&s),
            expect(&[("A", 10), ("D", 20), ("B", 21), ("C", 22)])
        );
        assert!(s.is_well_ordered());
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3)]);
        let before = layout(&s);

        assert_eq!(s.move_item("B", 1).unwrap(), MoveOutcome::Unchanged);
        assert_eq!(layout(&s), before);
    }

    #[test]
    fn test_move_index_out_of_range_rejected() {
        let mut s = store(&[("A", 1), ("B", 2)]);
        let before = layout(&s);

        assert_eq!(s.move_item("A", 2).unwrap(), MoveOutcome::Rejected);
        assert_eq!(layout(&s), before);
    }

    #[test]
    fn test_move_unknown_id_errors() {
        let mut s = store(&[("A", 1)]);
        assert!(matches!(
            s.move_item("Z", 0),
            Err(ReorderError::UnknownId(id)) if id == "Z"
        ));
    }

    #[test]
    fn test_move_to_top_and_bottom() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);

        s.move_to_top("C").unwrap();
        assert_eq!(
            layout(&s),
            expect(&[("C", 1), ("A", 2), ("B", 3), ("D", 4)])
        );

        s.move_to_bottom("A").unwrap();
        assert_eq!(
            layout(&s),
            expect(&[("C", 1), ("B", 2), ("D", 3), ("A", 4)])
        );
    }

    #[test]
    fn test_move_to_position_validates_range() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3)]);
        let before = layout(&s);

        assert_eq!(s.move_to_position("A", 0).unwrap(), MoveOutcome::Rejected);
        assert_eq!(s.move_to_position("A", 4).unwrap(), MoveOutcome::Rejected);
        assert_eq!(s.move_to_position("A", -7).unwrap(), MoveOutcome::Rejected);
        assert_eq!(layout(&s), before);

        assert_eq!(
            s.move_to_position("A", 3).unwrap(),
            MoveOutcome::Moved { from: 0, to: 2 }
        );
        assert_eq!(layout(&s), expect(&[("B", 1), ("C", 2), ("A", 3)]));
    }

    #[test]
    fn test_move_to_position_unknown_id_wins_over_range() {
        let mut s = store(&[("A", 1)]);
        assert!(matches!(
            s.move_to_position("Z", 99),
            Err(ReorderError::UnknownId(_))
        ));
    }

    #[test]
    fn test_move_onto_anchor() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);

        s.move_onto("A", "C").unwrap();
        assert_eq!(
            layout(&s),
            expect(&[("B", 1), ("C", 2), ("A", 3), ("D", 4)])
        );

        assert!(s.move_onto("A", "nope").is_err());
    }

    #[test]
    fn test_batch_move_example() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);
        let mut selection: SelectionSet = ["A", "C"].into_iter().collect();

        let outcome = s.batch_move(&mut selection, 2).unwrap();

        assert_eq!(outcome, MoveOutcome::BlockMoved { count: 2, at: 1 });
        assert_eq!(
            layout(&s),
            expect(&[("B", 1), ("A", 2), ("C", 3), ("D", 4)])
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_batch_move_full_renumber() {
        let mut s = store(&[("A", 10), ("B", 20), ("C", 30), ("D", 40)]);
        let mut selection: SelectionSet = ["D"].into_iter().collect();

        s.batch_move(&mut selection, 1).unwrap();

        assert_eq!(
            layout(&s),
            expect(&[("D", 1), ("A", 2), ("B", 3), ("C", 4)])
        );
    }

    #[test]
    fn test_batch_move_clamps_target() {
        let mut s = store(&[("A", 1), ("B", 2), ("C", 3)]);

        let mut selection: SelectionSet = ["A"].into_iter().collect();
        s.batch_move(&mut selection, 100).unwrap();
        assert_eq!(layout(&s), expect(&[("B", 1), ("C", 2), ("A", 3)]));

        let mut selection: SelectionSet = ["A"].into_iter().collect();
        s.batch_move(&mut selection, -5).unwrap();
        assert_eq!(layout(&s), expect(&[("A", 1), ("B", 2), ("C", 3)]));
    }

    #[test]
    fn test_batch_move_empty_selection_noop() {
        let mut s = store(&[("A", 1), ("B", 2)]);
        let before = layout(&s);
        let mut selection = SelectionSet::new();

        assert_eq!(
            s.batch_move(&mut selection, 1).unwrap(),
            MoveOutcome::Unchanged
        );
        assert_eq!(layout(&s), before);
    }

    #[test]
    fn test_batch_move_in_place_is_noop() {
        let mut s = store(&[("A", 5), ("B", 9), ("C", 12)]);
        let mut selection: SelectionSet = ["A", "B"].into_iter().collect();

        assert_eq!(
            s.batch_move(&mut selection, 1).unwrap(),
            MoveOutcome::Unchanged
        );
        // No renumber when the order did not change.
        assert_eq!(layout(&s), expect(&[("A", 5), ("B", 9), ("C", 12)]));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_batch_move_unknown_id_errors_without_mutation() {
        let mut s = store(&[("A", 1), ("B", 2)]);
        let before = layout(&s);
        let mut selection: SelectionSet = ["B", "ghost"].into_iter().collect();

        assert!(matches!(
            s.batch_move(&mut selection, 1),
            Err(ReorderError::UnknownId(id)) if id == "ghost"
        ));
        assert_eq!(layout(&s), before);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_outcome_is_change() {
        assert!(MoveOutcome::Moved { from: 0, to: 1 }.is_change());
        assert!(MoveOutcome::BlockMoved { count: 1, at: 0 }.is_change());
        assert!(!MoveOutcome::Unchanged.is_change());
        assert!(!MoveOutcome::Rejected.is_change());
    }
}
