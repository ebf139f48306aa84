//! Save coordinator: diff, submit once, advance the snapshot on success
//!
//! The coordinator is a two-step state machine so that either side can own
//! the network call:
//!
//! 1. [`SaveCoordinator::begin`] computes the diff. An empty diff finishes
//!    immediately; otherwise the changes are returned and the save is marked
//!    in flight.
//! 2. [`SaveCoordinator::complete`] takes the persist result. Success advances
//!    the snapshot by exactly the persisted changes; failure leaves both the
//!    snapshot and the edited working order alone so the operator can retry.
//!
//! [`SaveCoordinator::save`] runs both steps around a [`CatalogService`].

use super::service::CatalogService;
use crate::error::{CatalogError, ReorderError, Result};
use crate::order::{Change, OrderStore};
use serde::{Deserialize, Serialize};

/// First step of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePlan {
    /// Working order matches the snapshot; do not contact the catalog
    NoChanges,

    /// Send exactly these changes, then call `complete`
    Submit(Vec<Change>),
}

/// Successful end of a save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SaveOutcome {
    /// Nothing differed from the snapshot
    NoChanges,

    /// `count` changes were persisted
    Saved { count: usize },
}

/// Tracks the single in-flight save of a session
#[derive(Debug, Default)]
pub struct SaveCoordinator {
    in_flight: Option<Vec<Change>>,
}

impl SaveCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a `Submit` plan and the matching `complete`
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Compute the diff and, if non-empty, mark the save in flight
    pub fn begin(&mut self, store: &OrderStore) -> Result<SavePlan> {
        if self.in_flight.is_some() {
            return Err(ReorderError::SaveInFlight);
        }

        let changes = store.pending_changes()?;
        if changes.is_empty() {
            return Ok(SavePlan::NoChanges);
        }

        self.in_flight = Some(changes.clone());
        Ok(SavePlan::Submit(changes))
    }

    /// Resolve the in-flight save with the catalog's answer
    pub fn complete(
        &mut self,
        store: &mut OrderStore,
        result: std::result::Result<(), CatalogError>,
    ) -> Result<SaveOutcome> {
        let changes = self.in_flight.take().ok_or(ReorderError::NoSaveInFlight)?;

        match result {
            Ok(()) => {
                let snapshot = store.snapshot_mut();
                for change in &changes {
                    snapshot.advance(&change.id, change.new_position);
                }
                Ok(SaveOutcome::Saved {
                    count: changes.len(),
                })
            }
            Err(e) => Err(ReorderError::Persist(e)),
        }
    }

    /// Run a full save against `service`
    pub async fn save(
        &mut self,
        store: &mut OrderStore,
        service: &dyn CatalogService,
    ) -> Result<SaveOutcome> {
        match self.begin(store)? {
            SavePlan::NoChanges => Ok(SaveOutcome::NoChanges),
            SavePlan::Submit(changes) => {
                let result = service.persist(&changes).await;
                self.complete(store, result)
            }
        }
    }
}
