//! Engine configuration
//!
//! Everything has a default, so `{}` is a valid configuration document. Hosts
//! on the other side of the wasm boundary pass it as a JSON string.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not provide one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound applied to requested page sizes
pub const MAX_PAGE_SIZE: usize = 100;

/// Top-level configuration for a reorder session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub view: ViewConfig,
}

/// View projector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Page size used when a request asks for zero
    pub default_page_size: usize,

    /// Requested page sizes are capped to this
    pub max_page_size: usize,

    /// Searchable fields matched by the filter; empty means all of them
    pub search_fields: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            search_fields: vec!["title".to_string(), "category".to_string()],
        }
    }
}

impl ViewConfig {
    /// Clamp a requested page size into `1..=max_page_size`
    ///
    /// Zero falls back to the default page size.
    pub fn effective_page_size(&self, requested: usize) -> usize {
        let size = if requested == 0 {
            self.default_page_size
        } else {
            requested
        };
        size.clamp(1, self.max_page_size.max(1))
    }
}

impl EngineConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
