//! Browser entry point.
//!
//! `Designer` wraps [`Editor`] for the JavaScript host. Structured values
//! cross the boundary as JSON strings: hits and modifiers come in, action
//! lists go out. The host owns the renderer, clipboard, and asset loader and
//! applies whatever actions come back.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use crate::catalog::TemplateHandle;
use crate::config::EditorConfig;
use crate::doc::TransformUpdate;
use crate::engine::{Action, Editor};
use crate::error::{NoticeLevel, SceneError};
use crate::hit::{Hit, PrecomputedHits};
use crate::input::{Key, Modifiers, Pointer};
use crate::room::RoomDimensions;
use crate::transfer::{TransferKind, TransferTicket};

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_error)
}

fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsValue> {
    serde_json::from_str(text).map_err(js_error)
}

fn actions(actions: &[Action]) -> Result<String, JsValue> {
    to_json(actions)
}

#[wasm_bindgen]
pub struct Designer {
    editor: Editor,
}

#[wasm_bindgen]
impl Designer {
    /// Create an editor from a JSON config, or the built-in one when absent.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Designer, JsValue> {
        let config = match config_json {
            Some(text) => EditorConfig::from_json(&text).map_err(js_error)?,
            None => EditorConfig::default(),
        };
        Ok(Self { editor: Editor::new(&config) })
    }

    /// Asset manifest the host should load: `[{key, asset, scale, placementOffset}]`.
    pub fn manifest(&self) -> Result<String, JsValue> {
        let specs: Vec<_> = self.editor.state.catalog.templates().map(|t| &t.spec).collect();
        to_json(&specs)
    }

    pub fn boot(&self) -> Result<String, JsValue> {
        actions(&self.editor.boot())
    }

    // --- Assets ---

    pub fn asset_progress(&self, key: &str, loaded: f64, total: f64) -> u32 {
        let percent = self.editor.on_asset_progress(key, to_count(loaded), to_count(total));
        u32::try_from(percent).unwrap_or(100)
    }

    pub fn asset_loaded(&mut self, key: &str, handle: u32) -> Result<String, JsValue> {
        actions(&self.editor.on_asset_loaded(key, TemplateHandle(u64::from(handle))))
    }

    pub fn asset_failed(&mut self, key: &str, reason: &str) -> Result<String, JsValue> {
        actions(&self.editor.on_asset_failed(key, reason))
    }

    // --- Input ---

    /// Pointer down at normalized device coordinates. `hits_json` is the
    /// host's raycast result; `modifiers_json` is `{shift, ctrl, alt, meta}`.
    pub fn pointer_down(&mut self, x: f64, y: f64, modifiers_json: &str, hits_json: &str) -> Result<String, JsValue> {
        let modifiers: Modifiers = from_json(modifiers_json)?;
        let hits: Vec<Hit> = from_json(hits_json)?;
        actions(&self.editor.on_pointer_down(Pointer::new(x, y), modifiers, &PrecomputedHits(hits)))
    }

    /// Convert client pixel coordinates to the normalized pair `[x, y]`.
    pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec<f64> {
        let p = Pointer::from_client(client_x, client_y, width, height);
        vec![p.x, p.y]
    }

    pub fn key_down(&mut self, key: &str) -> Result<String, JsValue> {
        actions(&self.editor.on_key_down(&Key::from(key)))
    }

    pub fn select_model(&mut self, key: &str) -> Result<String, JsValue> {
        actions(&self.editor.select_model(key))
    }

    pub fn set_room(&mut self, width: f64, depth: f64, height: f64) -> Result<String, JsValue> {
        actions(&self.editor.set_room(width, depth, height))
    }

    /// Room from raw form-field text. Unparseable fields become a notice.
    pub fn set_room_text(&mut self, width: &str, depth: &str, height: &str) -> Result<String, JsValue> {
        actions(&set_room_from_text(&mut self.editor, width, depth, height))
    }

    /// Write a released gizmo's transform back to the record.
    pub fn gizmo_transform(&mut self, id: &str, update_json: &str) -> Result<String, JsValue> {
        let id = Uuid::parse_str(id).map_err(js_error)?;
        let update: TransformUpdate = from_json(update_json)?;
        actions(&self.editor.apply_gizmo_transform(&id, &update))
    }

    // --- Clipboard ---

    /// Start an export. Returns the text to write to the clipboard.
    pub fn begin_export(&mut self) -> Result<String, JsValue> {
        let (_ticket, text) = self.editor.begin_export().map_err(js_error)?;
        Ok(text)
    }

    /// Start an import before reading the clipboard.
    pub fn begin_import(&mut self) -> Result<(), JsValue> {
        self.editor.begin_import().map(|_ticket| ()).map_err(js_error)
    }

    /// Clipboard text arrived for the running import.
    pub fn complete_import(&mut self, text: &str) -> Result<String, JsValue> {
        let ticket = self.active(TransferKind::Import)?;
        actions(&self.editor.complete_import(ticket, text))
    }

    /// The host's clipboard call for the running transfer settled.
    /// `error` is the failure message, if any.
    pub fn finish_transfer(&mut self, error: Option<String>) -> Result<String, JsValue> {
        let Some(ticket) = self.editor.state.transfers.active() else {
            return Err(js_error(SceneError::UnknownTransfer(0)));
        };
        let outcome = match error {
            Some(reason) => Err(reason),
            None => Ok(()),
        };
        actions(&self.editor.finish_transfer(ticket, outcome))
    }

    pub fn is_busy(&self) -> bool {
        self.editor.state.transfers.is_busy()
    }

    // --- Queries ---

    pub fn cost_report(&self) -> Result<String, JsValue> {
        to_json(&self.editor.cost_report())
    }

    pub fn scene(&self) -> Result<String, JsValue> {
        to_json(self.editor.scene().objects())
    }

    pub fn selection(&self) -> Option<String> {
        self.editor.selection().map(|id| id.to_string())
    }

    pub fn is_interactive(&self) -> bool {
        self.editor.is_interactive()
    }
}

impl Designer {
    fn active(&self, kind: TransferKind) -> Result<TransferTicket, JsValue> {
        match self.editor.state.transfers.active() {
            Some(ticket) if ticket.kind == kind => Ok(ticket),
            Some(ticket) => Err(js_error(SceneError::UnknownTransfer(ticket.id))),
            None => Err(js_error(SceneError::UnknownTransfer(0))),
        }
    }
}

fn set_room_from_text(editor: &mut Editor, width: &str, depth: &str, height: &str) -> Vec<Action> {
    match RoomDimensions::parse(width, depth, height) {
        Ok(room) => editor.set_room(room.width, room.depth, room.height),
        Err(err) => vec![Action::notify_error(NoticeLevel::Error, &err)],
    }
}

fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        // Byte counts from the loader; fractional parts are meaningless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = value as u64;
        count
    } else {
        0
    }
}
