//! Reorder session - one operator editing one ordered collection
//!
//! A session owns the working order, the selection and the save state from
//! the moment the reorder surface opens until it is closed or cancelled.
//! Nothing else may read or write its working order in the meantime.
//!
//! # Example
//!
//! ```rust
//! use reorder_core::config::EngineConfig;
//! use reorder_core::order::OrderedItem;
//! use reorder_core::session::ReorderSession;
//!
//! let items = vec![
//!     OrderedItem::new("A", 1),
//!     OrderedItem::new("B", 2),
//!     OrderedItem::new("C", 3),
//! ];
//! let mut session = ReorderSession::open(items, &EngineConfig::default()).unwrap();
//!
//! session.move_to_top("C").unwrap();
//! assert_eq!(session.pending_changes().unwrap().len(), 3);
//!
//! session.cancel();
//! ```

mod coordinator;
mod service;

pub use coordinator::{SaveCoordinator, SaveOutcome, SavePlan};
pub use service::{CatalogService, InMemoryCatalog};

use crate::config::EngineConfig;
use crate::error::{CatalogError, ReorderError, Result};
use crate::order::{Change, MoveOutcome, OrderStore, OrderedItem, SelectionSet, SessionSnapshot};
use crate::view::{Page, Projector};
use uuid::Uuid;

/// Working state of one reorder session
#[derive(Debug)]
pub struct ReorderSession {
    id: Uuid,
    store: OrderStore,
    selection: SelectionSet,
    coordinator: SaveCoordinator,
    projector: Projector,
}

impl ReorderSession {
    /// Open a session over `items` (the persisted order)
    pub fn open(items: Vec<OrderedItem>, config: &EngineConfig) -> Result<Self> {
        let store = OrderStore::load(items)?;
        let id = Uuid::new_v4();
        tracing::info!(session = %id, items = store.len(), "reorder session opened");

        Ok(Self {
            id,
            store,
            selection: SelectionSet::new(),
            coordinator: SaveCoordinator::new(),
            projector: Projector::new(config.view.clone()),
        })
    }

    /// Open a session seeded from the catalog's current order
    pub async fn open_from(service: &dyn CatalogService, config: &EngineConfig) -> Result<Self> {
        let items = service.fetch_order().await?;
        Self::open(items, config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The working order, sorted by position
    pub fn current_order(&self) -> &[OrderedItem] {
        self.store.current_order()
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Filtered, paginated view of the working order
    pub fn project(&self, query: &str, page_index: usize, page_size: usize) -> Page<'_> {
        self.projector
            .project(self.store.current_order(), query, page_index, page_size)
    }

    // Single-item moves use bounded rotation (see `order::moves`).

    pub fn move_item(&mut self, id: &str, target_index: usize) -> Result<MoveOutcome> {
        self.store.move_item(id, target_index)
    }

    pub fn move_to_top(&mut self, id: &str) -> Result<MoveOutcome> {
        self.store.move_to_top(id)
    }

    pub fn move_to_bottom(&mut self, id: &str) -> Result<MoveOutcome> {
        self.store.move_to_bottom(id)
    }

    pub fn move_to_position(&mut self, id: &str, target_position: i64) -> Result<MoveOutcome> {
        self.store.move_to_position(id, target_position)
    }

    pub fn move_onto(&mut self, id: &str, anchor_id: &str) -> Result<MoveOutcome> {
        self.store.move_onto(id, anchor_id)
    }

    /// Add `id` to the selection; unknown ids are refused
    pub fn select(&mut self, id: &str) -> Result<bool> {
        self.store.index_of(id)?;
        Ok(self.selection.add(id))
    }

    pub fn deselect(&mut self, id: &str) -> bool {
        self.selection.remove(id)
    }

    /// Flip selection of `id`; unknown ids are refused
    pub fn toggle_selection(&mut self, id: &str) -> Result<bool> {
        self.store.index_of(id)?;
        Ok(self.selection.toggle(id))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Move the selected items as one block to 1-based `target_position`
    ///
    /// Full renumber, unlike the single-item moves: every position becomes
    /// `1..=N`, so the next save may touch the whole collection.
    pub fn batch_move(&mut self, target_position: i64) -> Result<MoveOutcome> {
        self.store.batch_move(&mut self.selection, target_position)
    }

    /// Changes a save would send right now
    pub fn pending_changes(&self) -> Result<Vec<Change>> {
        self.store.pending_changes()
    }

    pub fn has_unsaved_changes(&self) -> Result<bool> {
        Ok(!self.pending_changes()?.is_empty())
    }

    pub fn is_saving(&self) -> bool {
        self.coordinator.is_in_flight()
    }

    /// Start a host-driven save; see [`SaveCoordinator::begin`]
    pub fn begin_save(&mut self) -> Result<SavePlan> {
        let plan = self.coordinator.begin(&self.store)?;
        if let SavePlan::Submit(changes) = &plan {
            tracing::info!(session = %self.id, changes = changes.len(), "save submitted");
        }
        Ok(plan)
    }

    /// Finish a host-driven save with the catalog's answer
    pub fn complete_save(
        &mut self,
        result: std::result::Result<(), CatalogError>,
    ) -> Result<SaveOutcome> {
        let outcome = self.coordinator.complete(&mut self.store, result);
        self.log_save(&outcome);
        outcome
    }

    /// Diff and persist through `service`
    ///
    /// An unchanged working order never reaches the service. On failure the
    /// edits stay in place and `save` may be called again.
    pub async fn save(&mut self, service: &dyn CatalogService) -> Result<SaveOutcome> {
        let outcome = self.coordinator.save(&mut self.store, service).await;
        self.log_save(&outcome);
        outcome
    }

    fn log_save(&self, outcome: &Result<SaveOutcome>) {
        match outcome {
            Ok(SaveOutcome::NoChanges) => {
                tracing::info!(session = %self.id, "save skipped, no changes")
            }
            Ok(SaveOutcome::Saved { count }) => {
                tracing::info!(session = %self.id, count, "save succeeded")
            }
            Err(ReorderError::Persist(e)) => {
                tracing::warn!(session = %self.id, error = %e, "save failed, edits kept")
            }
            Err(e) => tracing::error!(session = %self.id, error = %e, "save aborted"),
        }
    }

    /// Discard the session without contacting the catalog
    pub fn cancel(self) {
        let unsaved = self.pending_changes().map(|c| c.len()).unwrap_or(0);
        tracing::info!(session = %self.id, unsaved, "reorder session cancelled");
    }

    /// Close the session and hand back the final working order
    pub fn close(self) -> Vec<OrderedItem> {
        tracing::info!(session = %self.id, "reorder session closed");
        self.store.current_order().to_vec()
    }
}
