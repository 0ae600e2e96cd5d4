//! Placement controller: turns host events into registry mutations.
//!
//! DESIGN
//! ======
//! `Editor` owns one `EditorState` and is the only thing that mutates it.
//! Every handler runs to completion synchronously and returns the
//! [`Action`]s the host must apply (spawn or drop display proxies, move the
//! gizmo, rebuild walls, refresh the cost list, show a notice). The host
//! never edits records itself; it only mirrors them.
//!
//! Failures never escape as panics. Anything the user should see becomes an
//! `Action::Notify`, and a failed operation leaves state as it was.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::catalog::{ModelCatalog, ModelOption, TemplateHandle};
use crate::codec;
use crate::config::EditorConfig;
use crate::cost::{CostPolicy, CostReport, CostTable};
use crate::doc::{ObjectId, PlacedObject, SceneRegistry, TransformUpdate};
use crate::error::{ErrorCode, Notice, NoticeLevel, SceneError};
use crate::grid;
use crate::hit::{self, Hit, RayCaster};
use crate::input::{GizmoMode, InteractionMode, Key, Modifiers, Pointer};
use crate::room::{self, RoomDimensions, WallSpec};
use crate::transfer::{TransferGate, TransferKind, TransferTicket};

/// A placed object paired with the template the host should clone for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub object: PlacedObject,
    pub template: TemplateHandle,
}

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Clone `template` into the scene for the new object.
    ObjectPlaced { placement: Placement },
    /// Detach and drop the display proxy for `id`.
    ObjectRemoved { id: ObjectId },
    /// Drop every display proxy and spawn these instead.
    SceneReplaced { placements: Vec<Placement> },
    /// Attach the gizmo to `id`, or detach it when `None`.
    SelectionChanged { id: Option<ObjectId> },
    /// Rebuild the four walls.
    RoomChanged { room: RoomDimensions, walls: [WallSpec; 4], texture_repeat: (f64, f64) },
    CostsChanged { report: CostReport },
    GizmoModeChanged { mode: GizmoMode },
    /// Refill the model selector.
    ModelOptionsChanged { options: Vec<ModelOption>, current: Option<String> },
    /// Every asset has settled; start listening for pointer and key events.
    InteractionEnabled,
    Notify { notice: Notice },
    RenderNeeded,
}

impl Action {
    pub(crate) fn notify_error<E: ErrorCode + std::fmt::Display>(level: NoticeLevel, err: &E) -> Self {
        Self::Notify { notice: Notice::from_error(level, err) }
    }
}

/// Everything the editor knows: registry, catalog, prices, and UI state.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub scene: SceneRegistry,
    pub catalog: ModelCatalog,
    pub costs: CostTable,
    pub policy: CostPolicy,
    /// Object the transform gizmo is attached to.
    pub selected: Option<ObjectId>,
    /// Model type placed by the next place action.
    pub current_model: Option<String>,
    pub gizmo: GizmoMode,
    pub transfers: TransferGate,
    interactive: bool,
}

impl EditorState {
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        let catalog = config.catalog();
        let current_model = catalog.templates().next().map(|t| t.spec.key.clone());
        Self {
            scene: SceneRegistry::with_room(config.room),
            interactive: catalog.is_settled(),
            catalog,
            costs: config.cost_table(),
            policy: config.cost_policy(),
            selected: None,
            current_model,
            gizmo: GizmoMode::default(),
            transfers: TransferGate::new(),
        }
    }
}

/// The placement controller.
#[derive(Debug, Clone)]
pub struct Editor {
    pub state: EditorState,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self { state: EditorState::from_config(config) }
    }

    /// Actions that bring a fresh host in sync: walls, cost list, first frame.
    #[must_use]
    pub fn boot(&self) -> Vec<Action> {
        vec![self.room_changed(), self.costs_changed(), Action::RenderNeeded]
    }

    // --- Asset loading ---

    /// Host reports download progress for one asset. Returns the percentage.
    pub fn on_asset_progress(&self, key: &str, loaded: u64, total: u64) -> u64 {
        let percent = (if total == 0 { 0 } else { loaded.saturating_mul(100) / total }).min(100);
        if self.state.catalog.get(key).is_none() {
            warn!(key, "progress reported for unregistered model");
        }
        debug!(key, percent, "loading model");
        percent
    }

    /// Host reports that an asset finished loading.
    pub fn on_asset_loaded(&mut self, key: &str, handle: TemplateHandle) -> Vec<Action> {
        if !self.state.catalog.mark_loaded(key, handle) {
            warn!(key, "ignoring load report for unregistered model");
            return self.settle();
        }
        info!(key, handle = handle.0, "model loaded");
        if self.state.interactive {
            // Late arrival (host retry): the selector must pick it up.
            return vec![self.refresh_options()];
        }
        self.settle()
    }

    /// Host reports that an asset failed to load. Other assets are unaffected.
    pub fn on_asset_failed(&mut self, key: &str, reason: &str) -> Vec<Action> {
        if !self.state.catalog.mark_failed(key, reason) {
            warn!(key, "ignoring failure report for unregistered model");
            return self.settle();
        }
        let err = SceneError::AssetFailed { key: key.to_owned(), reason: reason.to_owned() };
        error!(key, reason, "model failed to load");
        let mut actions = vec![Action::notify_error(NoticeLevel::Error, &err)];
        if self.state.interactive {
            actions.push(self.refresh_options());
        } else {
            actions.extend(self.settle());
        }
        actions
    }

    fn settle(&mut self) -> Vec<Action> {
        if self.state.interactive || !self.state.catalog.is_settled() {
            return Vec::new();
        }
        self.state.interactive = true;
        info!(loaded = self.state.catalog.loaded_keys().len(), total = self.state.catalog.len(), "all models settled");
        vec![self.refresh_options(), Action::InteractionEnabled]
    }

    /// Selector options for the loaded models. Falls back to the first
    /// loaded model if the current one can't be placed.
    fn refresh_options(&mut self) -> Action {
        let current_ok = self.state.current_model.as_deref().is_some_and(|key| self.state.catalog.is_loaded(key));
        if !current_ok {
            self.state.current_model = self.state.catalog.loaded_keys().first().map(|key| (*key).to_owned());
        }
        Action::ModelOptionsChanged { options: self.state.catalog.options(), current: self.state.current_model.clone() }
    }

    // --- Pointer and keyboard ---

    /// Dispatch a pointer-down by interaction mode against the nearest hit.
    pub fn on_pointer_down(&mut self, pointer: Pointer, modifiers: Modifiers, caster: &impl RayCaster) -> Vec<Action> {
        if !self.state.interactive {
            debug!("pointer ignored until models settle");
            return Vec::new();
        }

        let hits = caster.cast(pointer);
        let Some(hit) = hit::nearest(&hits) else {
            return self.set_selection(None);
        };

        match InteractionMode::from_modifiers(modifiers) {
            InteractionMode::Delete => self.delete_hit(&hit),
            InteractionMode::Place => self.place_at(&hit),
            InteractionMode::Select => {
                let target = hit.target.object_id().filter(|id| self.state.scene.contains(id));
                self.set_selection(target)
            }
            InteractionMode::Idle => Vec::new(),
        }
    }

    /// Keyboard shortcuts: `g` / `r` / `s` switch the gizmo mode.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let Some(mode) = GizmoMode::from_key(key) else {
            return Vec::new();
        };
        self.state.gizmo = mode;
        vec![Action::GizmoModeChanged { mode }]
    }

    fn delete_hit(&mut self, hit: &Hit) -> Vec<Action> {
        let Some(id) = hit.target.object_id() else {
            warn!(hit_target = ?hit.target, "refusing to delete structural node");
            return vec![Action::notify_error(NoticeLevel::Warning, &SceneError::StructuralTarget)];
        };
        let Some(removed) = self.state.scene.remove(&id) else {
            debug!(%id, "delete hit an object that is no longer registered");
            return Vec::new();
        };
        info!(%id, model = removed.model_key, "object deleted");

        let mut actions = vec![Action::ObjectRemoved { id }];
        actions.extend(self.set_selection(None));
        actions.push(self.costs_changed());
        actions
    }

    fn place_at(&mut self, hit: &Hit) -> Vec<Action> {
        let Some(key) = self.state.current_model.clone() else {
            warn!("place requested with no model selected");
            return vec![Action::notify_error(NoticeLevel::Warning, &SceneError::NoModelSelected)];
        };
        let (offset, scale, template) = match self.state.catalog.loaded(&key) {
            Ok(model) => (model.spec.placement_offset, model.spec.scale, model.handle),
            Err(err) => {
                warn!(key, "place requested for a model that is not loaded");
                return vec![Action::notify_error(NoticeLevel::Warning, &err)];
            }
        };

        let position = grid::snap(hit.point, hit.normal, Some(offset));
        let cost = self.state.costs.lookup_cost(&key);
        let object = PlacedObject::new(key, position, scale, cost);
        debug!(id = %object.id, model = object.model_key, ?position, cost, "object placed");
        self.state.scene.add(object.clone());

        vec![Action::ObjectPlaced { placement: Placement { object, template } }, self.costs_changed(), Action::RenderNeeded]
    }

    fn set_selection(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        if self.state.selected == id {
            return vec![Action::RenderNeeded];
        }
        self.state.selected = id;
        vec![Action::SelectionChanged { id }, Action::RenderNeeded]
    }

    // --- UI controls ---

    /// Model selector changed. The key is recorded even if it isn't loaded;
    /// placing with it is then refused.
    pub fn select_model(&mut self, key: &str) -> Vec<Action> {
        self.state.current_model = Some(key.to_owned());
        match self.state.catalog.loaded(key) {
            Ok(_) => Vec::new(),
            Err(err) => {
                warn!(key, "selected model is not available");
                vec![Action::notify_error(NoticeLevel::Warning, &err)]
            }
        }
    }

    /// Room sliders changed. Invalid input is reported and ignored.
    pub fn set_room(&mut self, width: f64, depth: f64, height: f64) -> Vec<Action> {
        let result = RoomDimensions::new(width, depth, height).and_then(|room| self.state.scene.set_room(room));
        match result {
            Ok(()) => vec![self.room_changed(), Action::RenderNeeded],
            Err(err) => {
                warn!(width, depth, height, error = %err, "room update rejected");
                vec![Action::notify_error(NoticeLevel::Error, &err)]
            }
        }
    }

    /// Transform gizmo released: write the result back to the record.
    pub fn apply_gizmo_transform(&mut self, id: &ObjectId, update: &TransformUpdate) -> Vec<Action> {
        if update.is_empty() {
            return Vec::new();
        }
        if self.state.scene.apply_transform(id, update) {
            vec![Action::RenderNeeded]
        } else {
            debug!(%id, "gizmo update for unknown object or non-finite transform ignored");
            Vec::new()
        }
    }

    // --- Clipboard transfers ---

    /// Take the transfer gate and encode the scene for the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `TransferInProgress` if another transfer holds the gate, or
    /// `Serialize` if encoding fails (the gate is released in that case).
    pub fn begin_export(&mut self) -> Result<(TransferTicket, String), SceneError> {
        let ticket = self.state.transfers.begin(TransferKind::Export)?;
        match codec::encode(&self.state.scene) {
            Ok(text) => Ok((ticket, text)),
            Err(err) => {
                self.state.transfers.finish(ticket)?;
                Err(err)
            }
        }
    }

    /// Take the transfer gate before reading the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `TransferInProgress` if another transfer holds the gate.
    pub fn begin_import(&mut self) -> Result<TransferTicket, SceneError> {
        self.state.transfers.begin(TransferKind::Import)
    }

    /// Clipboard text arrived: decode it and replace the scene. Releases the
    /// gate whatever the outcome. Structural errors leave the scene as it was.
    pub fn complete_import(&mut self, ticket: TransferTicket, text: &str) -> Vec<Action> {
        if ticket.kind != TransferKind::Import {
            warn!(ticket = ticket.id, kind = ?ticket.kind, "import completed with a non-import ticket");
            return vec![Action::notify_error(NoticeLevel::Error, &SceneError::UnknownTransfer(ticket.id))];
        }
        if let Err(err) = self.state.transfers.finish(ticket) {
            warn!(ticket = ticket.id, "import completed with a stale ticket");
            return vec![Action::notify_error(NoticeLevel::Error, &err)];
        }
        match self.import_text(text) {
            Ok(actions) => actions,
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "import rejected");
                vec![Action::notify_error(NoticeLevel::Error, &err)]
            }
        }
    }

    /// Host finished (or failed) its side of a transfer. `outcome` is the
    /// clipboard result; `Err` carries the host's failure message.
    pub fn finish_transfer(&mut self, ticket: TransferTicket, outcome: Result<(), String>) -> Vec<Action> {
        if let Err(err) = self.state.transfers.finish(ticket) {
            warn!(ticket = ticket.id, "finish with a stale ticket");
            return vec![Action::notify_error(NoticeLevel::Error, &err)];
        }
        match (outcome, ticket.kind) {
            (Ok(()), TransferKind::Export) => {
                info!(models = self.state.scene.len(), "scene exported to clipboard");
                vec![Action::Notify { notice: Notice::info("I_SCENE_EXPORTED", "scene copied to clipboard") }]
            }
            (Ok(()), TransferKind::Import) => Vec::new(),
            (Err(reason), kind) => {
                let err = SceneError::Clipboard(reason);
                error!(?kind, error = %err, "clipboard transfer failed");
                vec![Action::notify_error(NoticeLevel::Error, &err)]
            }
        }
    }

    fn import_text(&mut self, text: &str) -> Result<Vec<Action>, SceneError> {
        let decoded = codec::decode(text, &self.state.catalog, &self.state.costs)?;

        let mut actions = Vec::new();
        if let Some(room) = decoded.room {
            self.state.scene.set_room(room)?;
            actions.push(self.room_changed());
        }

        // Registry and display proxies must hold the same objects.
        let mut objects = Vec::with_capacity(decoded.objects.len());
        let mut placements = Vec::with_capacity(decoded.objects.len());
        for object in decoded.objects {
            match self.state.catalog.loaded(&object.model_key) {
                Ok(model) => {
                    placements.push(Placement { object: object.clone(), template: model.handle });
                    objects.push(object);
                }
                Err(err) => warn!(model = object.model_key, error = %err, "dropping decoded object without a template"),
            }
        }
        let accepted = objects.len();
        self.state.scene.replace_all(objects);
        info!(accepted, skipped = decoded.skipped.len(), "scene imported");

        actions.push(Action::SceneReplaced { placements });
        actions.extend(self.set_selection(None));
        actions.push(self.costs_changed());
        actions.extend(decoded.skipped.iter().map(|skipped| Action::Notify {
            notice: Notice {
                level: NoticeLevel::Warning,
                code: skipped.error.error_code(),
                message: format!("model #{} skipped: {}", skipped.index, skipped.error),
            },
        }));
        actions.push(Action::Notify { notice: Notice::info("I_SCENE_IMPORTED", format!("imported {accepted} models")) });
        Ok(actions)
    }

    // --- Queries ---

    /// Cost list and total under the current policy.
    #[must_use]
    pub fn cost_report(&self) -> CostReport {
        CostReport::build(self.state.scene.iter(), &self.state.policy)
    }

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.state.selected
    }

    #[must_use]
    pub fn current_model(&self) -> Option<&str> {
        self.state.current_model.as_deref()
    }

    #[must_use]
    pub fn room(&self) -> RoomDimensions {
        self.state.scene.room()
    }

    #[must_use]
    pub fn scene(&self) -> &SceneRegistry {
        &self.state.scene
    }

    #[must_use]
    pub fn gizmo_mode(&self) -> GizmoMode {
        self.state.gizmo
    }

    /// Whether pointer input is accepted (all assets settled).
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.state.interactive
    }

    fn room_changed(&self) -> Action {
        let room = self.state.scene.room();
        Action::RoomChanged { room, walls: room::wall_layout(&room), texture_repeat: room::texture_repeat(&room) }
    }

    fn costs_changed(&self) -> Action {
        Action::CostsChanged { report: self.cost_report() }
    }
}
