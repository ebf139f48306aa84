//! JavaScript bindings for the reorder session
//!
//! Structured values cross the boundary as JSON strings. The browser owns the
//! network, so saving is split into `beginSave` (returns the request body or
//! `undefined` when nothing changed) and `completeSave(ok, message)`.

use super::utils::{js_error, to_json};
use crate::config::EngineConfig;
use crate::error::CatalogError;
use crate::protocol::{decode_seed, encode_changes};
use crate::session::{ReorderSession, SavePlan};
use wasm_bindgen::prelude::*;

/// JavaScript-friendly wrapper for ReorderSession
#[wasm_bindgen]
pub struct WasmReorderSession {
    inner: ReorderSession,
}

#[wasm_bindgen]
impl WasmReorderSession {
    /// Open a session from a JSON seed array and an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(seed_json: &str, config_json: Option<String>) -> Result<WasmReorderSession, JsValue> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json).map_err(|e| js_error("Invalid config", e))?,
            None => EngineConfig::default(),
        };
        let items = decode_seed(seed_json).map_err(|e| js_error("Invalid seed", e))?;
        let inner = ReorderSession::open(items, &config).map_err(|e| js_error("Open failed", e))?;

        Ok(Self { inner })
    }

    /// Session id (UUID string)
    #[wasm_bindgen(js_name = getId)]
    pub fn get_id(&self) -> String {
        self.inner.id().to_string()
    }

    /// Number of items in the working order
    #[wasm_bindgen(js_name = length)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Working order as a JSON array
    #[wasm_bindgen(js_name = currentOrder)]
    pub fn current_order(&self) -> Result<String, JsValue> {
        to_json(self.inner.current_order())
    }

    /// Filtered, paginated page as JSON
    #[wasm_bindgen(js_name = project)]
    pub fn project(&self, query: &str, page_index: usize, page_size: usize) -> Result<String, JsValue> {
        to_json(&self.inner.project(query, page_index, page_size))
    }

    /// Drag-and-drop to a global index; returns the outcome as JSON
    #[wasm_bindgen(js_name = moveItem)]
    pub fn move_item(&mut self, id: &str, target_index: usize) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .move_item(id, target_index)
            .map_err(|e| js_error("Move failed", e))?;
        to_json(&outcome)
    }

    /// Drop `id` onto the slot held by `anchor_id`
    #[wasm_bindgen(js_name = moveOnto)]
    pub fn move_onto(&mut self, id: &str, anchor_id: &str) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .move_onto(id, anchor_id)
            .map_err(|e| js_error("Move failed", e))?;
        to_json(&outcome)
    }

    #[wasm_bindgen(js_name = moveToTop)]
    pub fn move_to_top(&mut self, id: &str) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .move_to_top(id)
            .map_err(|e| js_error("Move failed", e))?;
        to_json(&outcome)
    }

    #[wasm_bindgen(js_name = moveToBottom)]
    pub fn move_to_bottom(&mut self, id: &str) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .move_to_bottom(id)
            .map_err(|e| js_error("Move failed", e))?;
        to_json(&outcome)
    }

    /// Numeric entry (1-based); out-of-range values come back as `rejected`
    #[wasm_bindgen(js_name = moveToPosition)]
    pub fn move_to_position(&mut self, id: &str, target_position: f64) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .move_to_position(id, target_position as i64)
            .map_err(|e| js_error("Move failed", e))?;
        to_json(&outcome)
    }

    #[wasm_bindgen(js_name = select)]
    pub fn select(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .select(id)
            .map_err(|e| js_error("Select failed", e))
    }

    #[wasm_bindgen(js_name = deselect)]
    pub fn deselect(&mut self, id: &str) -> bool {
        self.inner.deselect(id)
    }

    #[wasm_bindgen(js_name = toggleSelection)]
    pub fn toggle_selection(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .toggle_selection(id)
            .map_err(|e| js_error("Select failed", e))
    }

    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner.selection().contains(id)
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    /// Move the selection as a block to 1-based `target_position`
    #[wasm_bindgen(js_name = batchMove)]
    pub fn batch_move(&mut self, target_position: f64) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .batch_move(target_position as i64)
            .map_err(|e| js_error("Batch move failed", e))?;
        to_json(&outcome)
    }

    /// Pending changes as a JSON array
    #[wasm_bindgen(js_name = pendingChanges)]
    pub fn pending_changes(&self) -> Result<String, JsValue> {
        let changes = self
            .inner
            .pending_changes()
            .map_err(|e| js_error("Diff failed", e))?;
        to_json(&changes)
    }

    #[wasm_bindgen(js_name = isSaving)]
    pub fn is_saving(&self) -> bool {
        self.inner.is_saving()
    }

    /// Start a save; returns the persist request body, or `undefined` when
    /// there is nothing to send
    #[wasm_bindgen(js_name = beginSave)]
    pub fn begin_save(&mut self) -> Result<Option<String>, JsValue> {
        match self
            .inner
            .begin_save()
            .map_err(|e| js_error("Save failed", e))?
        {
            SavePlan::NoChanges => Ok(None),
            SavePlan::Submit(changes) => encode_changes(&changes)
                .map(Some)
                .map_err(|e| js_error("JSON serialization failed", e)),
        }
    }

    /// Resolve the in-flight save; `message` describes a failure
    #[wasm_bindgen(js_name = completeSave)]
    pub fn complete_save(&mut self, ok: bool, message: Option<String>) -> Result<String, JsValue> {
        let result = if ok {
            Ok(())
        } else {
            Err(CatalogError::Connection(
                message.unwrap_or_else(|| "save failed".to_string()),
            ))
        };
        let outcome = self
            .inner
            .complete_save(result)
            .map_err(|e| js_error("Save failed", e))?;
        to_json(&outcome)
    }
}
