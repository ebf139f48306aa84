//! CatalogService - the backend that owns persisted positions

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::CatalogError;
use crate::order::{Change, OrderedItem};

/// Async interface to the catalog holding the persisted order
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Load the current persisted order (seed for a new session)
    async fn fetch_order(&self) -> Result<Vec<OrderedItem>, CatalogError>;

    /// Store a batch of position changes, all or nothing
    async fn persist(&self, changes: &[Change]) -> Result<(), CatalogError>;
}

/// In-memory catalog for development and testing
///
/// Failures can be scripted with [`InMemoryCatalog::fail_next`] to exercise
/// retry paths.
pub struct InMemoryCatalog {
    items: RwLock<HashMap<String, OrderedItem>>,
    persist_calls: AtomicUsize,
    pending_failures: AtomicUsize,
}

impl InMemoryCatalog {
    /// Create a catalog seeded with `items`
    pub fn new(items: Vec<OrderedItem>) -> Self {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|item| (item.id.clone(), item))
                    .collect(),
            ),
            persist_calls: AtomicUsize::new(0),
            pending_failures: AtomicUsize::new(0),
        }
    }

    /// Make the next `count` persist calls fail with a connection error
    pub fn fail_next(&self, count: usize) {
        self.pending_failures.store(count, Ordering::SeqCst);
    }

    /// Number of persist calls received, failed ones included
    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }

    /// Persisted position of `id`
    pub fn position_of(&self, id: &str) -> Option<i64> {
        self.items
            .read()
            .ok()
            .and_then(|items| items.get(id).map(|item| item.position))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn fetch_order(&self) -> Result<Vec<OrderedItem>, CatalogError> {
        let items = self
            .items
            .read()
            .map_err(|e| CatalogError::Internal(e.to_string()))?;
        let mut order: Vec<_> = items.values().cloned().collect();
        order.sort_by_key(|item| item.position);
        Ok(order)
    }

    async fn persist(&self, changes: &[Change]) -> Result<(), CatalogError> {
        self.persist_calls.fetch_add(1, Ordering::SeqCst);

        let scripted_failure = self
            .pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if scripted_failure {
            return Err(CatalogError::Connection("scripted failure".to_string()));
        }

        let mut items = self
            .items
            .write()
            .map_err(|e| CatalogError::Internal(e.to_string()))?;

        // Validate the whole batch before applying any of it.
        if let Some(unknown) = changes.iter().find(|c| !items.contains_key(&c.id)) {
            return Err(CatalogError::Rejected(format!("unknown item {}", unknown.id)));
        }
        for change in changes {
            if let Some(item) = items.get_mut(&change.id) {
                item.position = change.new_position;
            }
        }
        Ok(())
    }
}
