//! Scene registry: placed equipment records and the room they stand in.
//!
//! This module defines the authoritative record for a piece of placed
//! equipment (`PlacedObject`), a sparse-update type for transform edits
//! coming back from the gizmo (`TransformUpdate`), and the store that owns
//! every live record plus the current room (`SceneRegistry`).
//!
//! The floor and walls are structural and never live here. Hit targets
//! name them separately (see [`crate::hit::HitTarget`]), so a wall can never
//! be exported, priced, or deleted through the registry.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SceneError;
use crate::math::Vec3;
use crate::room::RoomDimensions;

/// Unique identifier for a placed object. Never serialized to documents.
pub type ObjectId = Uuid;

/// A piece of equipment placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    /// Identity of this record; the host keys its display proxy by it.
    pub id: ObjectId,
    /// Catalog key of the equipment template.
    pub model_key: String,
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Price looked up from the cost table when the record was created.
    pub cost: f64,
}

impl PlacedObject {
    /// Create a record with a fresh id, no rotation, and the given scale.
    #[must_use]
    pub fn new(model_key: impl Into<String>, position: Vec3, scale: Vec3, cost: f64) -> Self {
        Self { id: Uuid::new_v4(), model_key: model_key.into(), position, rotation: Vec3::ZERO, scale, cost }
    }
}

/// Sparse transform update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl TransformUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

/// In-memory store of placed objects plus the room dimensions.
///
/// Records keep insertion order; order carries no meaning but is what
/// export and the cost list show.
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    objects: Vec<PlacedObject>,
    room: RoomDimensions,
}

impl SceneRegistry {
    /// Create an empty registry with the default room.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given room.
    #[must_use]
    pub fn with_room(room: RoomDimensions) -> Self {
        Self { objects: Vec::new(), room }
    }

    /// Append a record. Overlapping positions and repeated keys are allowed.
    pub fn add(&mut self, obj: PlacedObject) {
        self.objects.push(obj);
    }

    /// Remove a record by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<PlacedObject> {
        let idx = self.objects.iter().position(|obj| obj.id == *id)?;
        Some(self.objects.remove(idx))
    }

    /// Discard every record and install `objects` in their place.
    pub fn replace_all(&mut self, objects: Vec<PlacedObject>) {
        self.objects = objects;
    }

    /// Replace the room dimensions after validating them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomData` and keeps the previous room if any field
    /// is not a finite positive number.
    pub fn set_room(&mut self, room: RoomDimensions) -> Result<(), SceneError> {
        room.validate()?;
        self.room = room;
        Ok(())
    }

    /// Current room dimensions.
    #[must_use]
    pub fn room(&self) -> RoomDimensions {
        self.room
    }

    /// Return a reference to a record by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|obj| obj.id == *id)
    }

    /// Whether a record with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Apply a gizmo transform to an existing record. Returns false if the
    /// record doesn't exist or the update carries non-finite values.
    pub fn apply_transform(&mut self, id: &ObjectId, update: &TransformUpdate) -> bool {
        let finite = [update.position, update.rotation, update.scale].iter().flatten().all(|v| v.is_finite());
        if !finite {
            return false;
        }
        let Some(obj) = self.objects.iter_mut().find(|obj| obj.id == *id) else {
            return false;
        };
        if let Some(position) = update.position {
            obj.position = position;
        }
        if let Some(rotation) = update.rotation {
            obj.rotation = rotation;
        }
        if let Some(scale) = update.scale {
            obj.scale = scale;
        }
        true
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter()
    }

    /// Records as a slice in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Number of placed objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
