//! Room dimensions and the structural geometry derived from them.
//!
//! The room is a floor plus four wall slabs sized from `RoomDimensions`.
//! The host engine builds the meshes; this module only decides where the
//! slabs go and how the wall texture tiles.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, WALL_TEXTURE_TILE, WALL_THICKNESS};
use crate::error::{RoomField, SceneError};
use crate::math::Vec3;

/// Interior size of the room in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self { width: DEFAULT_ROOM_WIDTH, depth: DEFAULT_ROOM_DEPTH, height: DEFAULT_ROOM_HEIGHT }
    }
}

impl RoomDimensions {
    /// Build validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomData` naming the first field that is not a
    /// finite positive number.
    pub fn new(width: f64, depth: f64, height: f64) -> Result<Self, SceneError> {
        let room = Self { width, depth, height };
        room.validate()?;
        Ok(room)
    }

    /// Check that every dimension is a finite positive number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomData` for the first offending field.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (field, value) in [(RoomField::Width, self.width), (RoomField::Depth, self.depth), (RoomField::Height, self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::InvalidRoomData { field });
            }
        }
        Ok(())
    }

    /// Parse slider-style text input. Whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomData` if any field does not parse or is not positive.
    pub fn parse(width: &str, depth: &str, height: &str) -> Result<Self, SceneError> {
        let field = |raw: &str, field: RoomField| raw.trim().parse::<f64>().map_err(|_| SceneError::InvalidRoomData { field });
        Self::new(field(width, RoomField::Width)?, field(depth, RoomField::Depth)?, field(height, RoomField::Height)?)
    }
}

/// Which side of the room a wall closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    /// +z side.
    Back,
    /// -z side.
    Front,
    /// +x side.
    Right,
    /// -x side.
    Left,
}

impl WallSide {
    pub const ALL: [Self; 4] = [Self::Back, Self::Front, Self::Right, Self::Left];
}

/// Placement of one wall slab: center position and box size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub side: WallSide,
    pub position: Vec3,
    pub size: Vec3,
}

/// The four wall slabs enclosing `room`, centered on the origin and
/// standing on the floor.
#[must_use]
pub fn wall_layout(room: &RoomDimensions) -> [WallSpec; 4] {
    let half_w = room.width / 2.0;
    let half_d = room.depth / 2.0;
    let mid_y = room.height / 2.0;
    WallSide::ALL.map(|side| match side {
        WallSide::Back | WallSide::Front => WallSpec {
            side,
            position: Vec3::new(0.0, mid_y, if side == WallSide::Back { half_d } else { -half_d }),
            size: Vec3::new(room.width, room.height, WALL_THICKNESS),
        },
        WallSide::Right | WallSide::Left => WallSpec {
            side,
            position: Vec3::new(if side == WallSide::Right { half_w } else { -half_w }, mid_y, 0.0),
            size: Vec3::new(WALL_THICKNESS, room.height, room.depth),
        },
    })
}

/// Horizontal and vertical texture repeat counts for the wall material.
#[must_use]
pub fn texture_repeat(room: &RoomDimensions) -> (f64, f64) {
    (room.width / WALL_TEXTURE_TILE, room.height / WALL_TEXTURE_TILE)
}
