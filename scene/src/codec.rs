//! Interchange codec: scene registry to and from clipboard JSON.
//!
//! DESIGN
//! ======
//! The document is `{ "room": {width, depth, height}, "models": [...] }`,
//! each model `{modelKey, position, rotation, scale}` with `{x, y, z}`
//! vectors. Ids and costs stay out of the document; cost is re-derived
//! from the cost table on every decode so a re-import re-prices the scene.
//!
//! Decoding is two-tier. Problems with the document as a whole (not JSON,
//! bad room, no models array) abort with a `SceneError` and nothing is
//! applied. Problems with an individual record skip that record with a
//! warning and are returned in [`DecodedScene::skipped`].
//!
//! A bare JSON array of model records is accepted as a legacy document
//! without room data.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::ModelCatalog;
use crate::cost::CostTable;
use crate::doc::{PlacedObject, SceneRegistry};
use crate::error::{ErrorCode, RecordError, RoomField, SceneError};
use crate::math::Vec3;
use crate::room::RoomDimensions;

// =============================================================================
// TYPES
// =============================================================================

/// One model entry in the interchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub model_key: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl From<&PlacedObject> for ModelRecord {
    fn from(obj: &PlacedObject) -> Self {
        Self { model_key: obj.model_key.clone(), position: obj.position, rotation: obj.rotation, scale: obj.scale }
    }
}

/// The full interchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub room: RoomDimensions,
    pub models: Vec<ModelRecord>,
}

/// A record that was dropped during decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the document's models array.
    pub index: usize,
    pub error: RecordError,
}

/// Result of decoding a document.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedScene {
    /// Room from the document, absent for legacy array documents.
    pub room: Option<RoomDimensions>,
    /// Accepted records, priced from the cost table, in document order.
    pub objects: Vec<PlacedObject>,
    pub skipped: Vec<SkippedRecord>,
}

const VECTOR_FIELDS: [(&str, [&str; 3]); 3] = [
    ("position", ["position.x", "position.y", "position.z"]),
    ("rotation", ["rotation.x", "rotation.y", "rotation.z"]),
    ("scale", ["scale.x", "scale.y", "scale.z"]),
];

// =============================================================================
// ENCODE
// =============================================================================

/// Build the interchange document for a registry.
#[must_use]
pub fn to_document(registry: &SceneRegistry) -> SceneDocument {
    SceneDocument { room: registry.room(), models: registry.iter().map(ModelRecord::from).collect() }
}

/// Encode a registry as pretty-printed JSON (two-space indent).
///
/// # Errors
///
/// Returns `Serialize` if serde_json fails to write the document.
pub fn encode(registry: &SceneRegistry) -> Result<String, SceneError> {
    let doc = to_document(registry);
    let text = serde_json::to_string_pretty(&doc)?;
    debug!(models = doc.models.len(), bytes = text.len(), "scene encoded");
    Ok(text)
}

// =============================================================================
// DECODE
// =============================================================================

/// Decode a document against the currently loaded models and prices.
///
/// # Errors
///
/// - `MalformedDocument` if `text` is not JSON, or is neither an object nor an array.
/// - `InvalidRoomData` if a `room` is present but any dimension is not a positive number.
/// - `MissingModelsField` if an object document lacks a `models` array.
pub fn decode(text: &str, catalog: &ModelCatalog, costs: &CostTable) -> Result<DecodedScene, SceneError> {
    let value: Value = serde_json::from_str(text).map_err(|e| SceneError::MalformedDocument(e.to_string()))?;

    let (room, items) = match &value {
        Value::Array(items) => (None, items.as_slice()),
        Value::Object(map) => {
            let room = match map.get("room") {
                None | Some(Value::Null) => None,
                Some(raw) => Some(decode_room(raw)?),
            };
            let Some(Value::Array(items)) = map.get("models") else {
                return Err(SceneError::MissingModelsField);
            };
            (room, items.as_slice())
        }
        _ => return Err(SceneError::MalformedDocument("expected an object or an array at top level".into())),
    };

    let mut objects = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match decode_record(item, catalog) {
            Ok(record) => {
                let cost = costs.lookup_cost(&record.model_key);
                objects.push(PlacedObject {
                    id: Uuid::new_v4(),
                    model_key: record.model_key,
                    position: record.position,
                    rotation: record.rotation,
                    scale: record.scale,
                    cost,
                });
            }
            Err(error) => {
                warn!(index, code = error.error_code(), error = %error, "skipping model record");
                skipped.push(SkippedRecord { index, error });
            }
        }
    }

    debug!(accepted = objects.len(), skipped = skipped.len(), has_room = room.is_some(), "scene decoded");
    Ok(DecodedScene { room, objects, skipped })
}

fn decode_room(raw: &Value) -> Result<RoomDimensions, SceneError> {
    let field = |name: &str, field: RoomField| raw.get(name).and_then(Value::as_f64).ok_or(SceneError::InvalidRoomData { field });
    RoomDimensions::new(
        field("width", RoomField::Width)?,
        field("depth", RoomField::Depth)?,
        field("height", RoomField::Height)?,
    )
}

/// Validate one record's shape, then check its model is loaded.
fn decode_record(item: &Value, catalog: &ModelCatalog) -> Result<ModelRecord, RecordError> {
    let model_key = item
        .get("modelKey")
        .and_then(Value::as_str)
        .ok_or(RecordError::InvalidRecordShape("modelKey"))?;

    let mut vectors = [Vec3::ZERO; 3];
    for (slot, (name, paths)) in vectors.iter_mut().zip(VECTOR_FIELDS) {
        let obj = item.get(name);
        let mut comps = [0.0; 3];
        for ((comp, axis), path) in comps.iter_mut().zip(["x", "y", "z"]).zip(paths) {
            *comp = obj
                .and_then(|o| o.get(axis))
                .and_then(Value::as_f64)
                .ok_or(RecordError::InvalidRecordShape(path))?;
        }
        *slot = Vec3::from(comps);
    }

    if !catalog.is_loaded(model_key) {
        return Err(RecordError::UnknownModel(model_key.to_owned()));
    }

    let [position, rotation, scale] = vectors;
    Ok(ModelRecord { model_key: model_key.to_owned(), position, rotation, scale })
}
