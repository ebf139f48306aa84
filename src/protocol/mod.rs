//! Wire formats exchanged with the catalog service and UI hosts

pub mod wire;

pub use wire::{decode_changes, decode_seed, encode_changes, seed_from_value, ChangeBatch};
