//! Reorder Core - position management for priority-ordered collections
//!
//! This is the engine behind re-sequencing a list of records (drag-and-drop,
//! numeric entry, top/bottom shortcuts, bulk block moves) while a search
//! filter and pager are active, compiled to both native and WASM.
//! It implements:
//! - An ordered item store with a session snapshot
//! - A read-only filter/pagination projector
//! - Bounded-rotation single moves and full-renumber block moves
//! - A minimal diff against the last persisted order
//! - A save coordinator with at most one save in flight
//!
//! # Examples
//!
//! ```rust
//! use reorder_core::order::{Change, OrderStore, OrderedItem};
//!
//! let mut store = OrderStore::load(vec![
//!     OrderedItem::new("A", 1),
//!     OrderedItem::new("B", 2),
//!     OrderedItem::new("C", 3),
//! ])
//! .unwrap();
//!
//! store.move_to_top("C").unwrap();
//!
//! assert_eq!(
//!     store.pending_changes().unwrap(),
//!     vec![Change::new("C", 1), Change::new("A", 2), Change::new("B", 3)]
//! );
//! ```

pub mod config;
pub mod error;
pub mod order;
pub mod protocol;
pub mod session;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use config::EngineConfig;
pub use error::{CatalogError, ReorderError, Result};
pub use order::{Change, MoveOutcome, OrderStore, OrderedItem, SelectionSet};
pub use session::{CatalogService, ReorderSession, SaveOutcome};

/// Stable item identifier type
pub type ItemId = String;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        // Smoke test that the re-exports line up
        let _id: ItemId = "benefit-1".to_string();
        let _config = EngineConfig::default();
    }
}
