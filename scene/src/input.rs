//! Input model: modifier keys, interaction modes, gizmo modes, pointer coordinates.
//!
//! A pointer-down does one of three things depending on which modifier is
//! held: Shift deletes, Ctrl places, Alt selects. `InteractionMode` makes
//! that dispatch an explicit value so the controller's action logic never
//! inspects raw key flags.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// What a pointer-down does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// No modifier: pointer-down on geometry does nothing.
    #[default]
    Idle,
    /// Remove the hit object.
    Delete,
    /// Place the current model at the snapped hit position.
    Place,
    /// Attach the transform gizmo to the hit object.
    Select,
}

impl InteractionMode {
    /// Derive the mode from held modifiers. Shift wins over Ctrl, Ctrl over Alt.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Self::Delete
        } else if modifiers.ctrl {
            Self::Place
        } else if modifiers.alt {
            Self::Select
        } else {
            Self::Idle
        }
    }
}

/// Transform gizmo manipulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl GizmoMode {
    /// Keyboard shortcut: `g` translate, `r` rotate, `s` scale.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.0.as_str() {
            "g" => Some(Self::Translate),
            "r" => Some(Self::Rotate),
            "s" => Some(Self::Scale),
            _ => None,
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"g"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Pointer position in normalized device coordinates: x and y in `[-1, 1]`,
/// y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert client (CSS pixel) coordinates within a viewport of the given
    /// size to normalized device coordinates.
    #[must_use]
    pub fn from_client(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Self::default();
        }
        Self { x: (client_x / viewport_width) * 2.0 - 1.0, y: -(client_y / viewport_height) * 2.0 + 1.0 }
    }
}
