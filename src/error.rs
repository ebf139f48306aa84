//! Error types for the reorder engine
//!
//! Invalid targets (a numeric position outside `1..=len`) are not errors: they
//! are absorbed by the operation and reported as
//! [`MoveOutcome::Rejected`](crate::order::MoveOutcome::Rejected).
//! Everything in this module is a structural or transport failure and is
//! always propagated to the caller.

use crate::ItemId;
use thiserror::Error;

/// Result type for reorder operations
pub type Result<T> = std::result::Result<T, ReorderError>;

/// Errors raised by the store, the operations and the save coordinator
#[derive(Debug, Error)]
pub enum ReorderError {
    /// An operation addressed an id that is not in the working order
    #[error("Unknown item id: {0}")]
    UnknownId(ItemId),

    /// The seed contained the same id twice
    #[error("Duplicate item id in seed: {0}")]
    DuplicateId(ItemId),

    /// The seed contained two items at the same position
    #[error("Duplicate position {position} (items {first} and {second})")]
    DuplicatePosition {
        position: i64,
        first: ItemId,
        second: ItemId,
    },

    /// The snapshot holds an id the working order no longer has
    #[error("Item {0} is in the session snapshot but missing from the working order")]
    MissingFromWorkingOrder(ItemId),

    /// A save was started while another one is still unresolved
    #[error("A save is already in flight")]
    SaveInFlight,

    /// A save was completed although none was started
    #[error("No save is in flight")]
    NoSaveInFlight,

    /// The catalog service refused or failed a request
    #[error("Persistence failed: {0}")]
    Persist(#[from] CatalogError),

    /// Malformed seed or configuration payload
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// JSON encoding/decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a [`CatalogService`](crate::session::CatalogService)
///
/// A persist call is all-or-nothing: any of these means no change from the
/// batch was stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Rejected by catalog: {0}")]
    Rejected(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
