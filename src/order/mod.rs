//! Ordered collection engine
//!
//! This module holds the data model and the algorithms that mutate it.
//!
//! - **OrderedItem:** stably-identified record with an integer position
//! - **OrderStore:** the working order and the session snapshot
//! - **SelectionSet:** ids picked for a batch move
//! - **Reorder operations:** bounded-rotation single moves, full-renumber block moves
//! - **Diff:** minimal `{id, newPosition}` set against the snapshot

pub mod diff;
pub mod item;
pub mod moves;
pub mod selection;
pub mod store;

pub use diff::{diff, Change};
pub use item::OrderedItem;
pub use moves::MoveOutcome;
pub use selection::SelectionSet;
pub use store::{OrderStore, SessionSnapshot};
