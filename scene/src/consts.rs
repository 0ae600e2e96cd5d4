//! Shared numeric constants for the scene crate.

// ── Grid ────────────────────────────────────────────────────────

/// Edge length of one placement grid cell, in world units.
pub const GRID_CELL: f64 = 50.0;

/// Offset from a cell's lower corner to its center.
pub const GRID_HALF_CELL: f64 = GRID_CELL / 2.0;

// ── Room ────────────────────────────────────────────────────────

/// Initial room width before any slider input.
pub const DEFAULT_ROOM_WIDTH: f64 = 1000.0;

/// Initial room depth before any slider input.
pub const DEFAULT_ROOM_DEPTH: f64 = 1000.0;

/// Initial room height before any slider input.
pub const DEFAULT_ROOM_HEIGHT: f64 = 200.0;

/// Thickness of each structural wall slab.
pub const WALL_THICKNESS: f64 = 10.0;

/// World units covered by one repetition of the wall texture.
pub const WALL_TEXTURE_TILE: f64 = 200.0;

// ── Models ──────────────────────────────────────────────────────

/// Uniform import scale applied to every built-in equipment asset.
pub const DEFAULT_MODEL_SCALE: f64 = 100.0;

/// Built-in placement offset (x, y, z) compensating for asset origins.
pub const DEFAULT_PLACEMENT_OFFSET: (f64, f64, f64) = (8.0, -22.0, 0.0);
