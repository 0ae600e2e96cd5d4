#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::doc::ObjectId;
use crate::input::Pointer;
use crate::math::Vec3;
use crate::room::WallSide;

/// What a ray hit, resolved to its top-level scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HitTarget {
    Floor,
    Wall { side: WallSide },
    Object { id: ObjectId },
}

impl HitTarget {
    /// Floor and walls are structural: never selectable or deletable.
    #[must_use]
    pub fn is_structural(self) -> bool {
        matches!(self, Self::Floor | Self::Wall { .. })
    }

    /// The placed object this target refers to, if any.
    #[must_use]
    pub fn object_id(self) -> Option<ObjectId> {
        match self {
            Self::Object { id } => Some(id),
            Self::Floor | Self::Wall { .. } => None,
        }
    }
}

/// One ray intersection reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub target: HitTarget,
    /// World-space impact point.
    pub point: Vec3,
    /// Surface normal at the impact point.
    pub normal: Vec3,
    /// Distance from the ray origin.
    pub distance: f64,
}

/// Ray casting supplied by the rendering engine.
pub trait RayCaster {
    /// Intersect the camera ray through `pointer` with the floor, walls, and
    /// placed objects. Hits should be ordered nearest first.
    fn cast(&self, pointer: Pointer) -> Vec<Hit>;
}

/// Hits computed ahead of time by the host, ignoring the pointer.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedHits(pub Vec<Hit>);

impl RayCaster for PrecomputedHits {
    fn cast(&self, _pointer: Pointer) -> Vec<Hit> {
        self.0.clone()
    }
}

/// The nearest hit, regardless of the order the engine returned them in.
/// Hits with a NaN distance are ignored.
#[must_use]
pub fn nearest(hits: &[Hit]) -> Option<Hit> {
    hits.iter()
        .filter(|h| !h.distance.is_nan())
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
        .copied()
}
