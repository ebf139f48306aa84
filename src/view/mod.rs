//! Read path for displaying the working order
//!
//! The projector filters by free text and slices pages; it never writes.

pub mod projector;

pub use projector::{Page, Projector};
