//! Placement grid snapping.
//!
//! A raw ray impact is nudged one unit along the surface normal, then
//! snapped to the center of the 50-unit cell it falls in, and finally
//! shifted by the model's placement offset. Snapping is per-axis and
//! uses `floor`, so negative coordinates land on cell centers the same
//! way positive ones do.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{GRID_CELL, GRID_HALF_CELL};
use crate::math::Vec3;

/// Compute the final placement position for a ray impact.
///
/// `point` is the impact point, `normal` the surface normal at that point,
/// and `offset` the optional per-model placement offset.
#[must_use]
pub fn snap(point: Vec3, normal: Vec3, offset: Option<Vec3>) -> Vec3 {
    let centered = snap_to_cell_center(point + normal);
    match offset {
        Some(offset) => centered + offset,
        None => centered,
    }
}

/// Snap a position to the center of the grid cell that contains it.
#[must_use]
pub fn snap_to_cell_center(v: Vec3) -> Vec3 {
    (v / GRID_CELL).floor().map(|c| c * GRID_CELL).add_scalar(GRID_HALF_CELL)
}

/// Whether every component of `v` sits exactly on a cell center (`50k + 25`).
#[must_use]
pub fn is_cell_center(v: Vec3) -> bool {
    v.to_array().iter().all(|&c| {
        let k = (c - GRID_HALF_CELL) / GRID_CELL;
        k.is_finite() && k.fract().abs() < f64::EPSILON
    })
}
