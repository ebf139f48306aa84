//! WASM bindings for the reorder engine
//!
//! This module exposes the reorder session to a browser-based admin UI.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::WasmReorderSession;
