#![allow(clippy::float_cmp)]

use super::*;

fn mods(shift: bool, ctrl: bool, alt: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta: false }
}

// =============================================================
// InteractionMode
// =============================================================

#[test]
fn no_modifier_is_idle() {
    assert_eq!(InteractionMode::from_modifiers(Modifiers::default()), InteractionMode::Idle);
    assert_eq!(InteractionMode::default(), InteractionMode::Idle);
}

#[test]
fn single_modifiers_map_to_modes() {
    assert_eq!(InteractionMode::from_modifiers(mods(true, false, false)), InteractionMode::Delete);
    assert_eq!(InteractionMode::from_modifiers(mods(false, true, false)), InteractionMode::Place);
    assert_eq!(InteractionMode::from_modifiers(mods(false, false, true)), InteractionMode::Select);
}

#[test]
fn precedence_is_delete_then_place_then_select() {
    assert_eq!(InteractionMode::from_modifiers(mods(true, true, true)), InteractionMode::Delete);
    assert_eq!(InteractionMode::from_modifiers(mods(false, true, true)), InteractionMode::Place);
}

#[test]
fn meta_alone_is_idle() {
    let m = Modifiers { meta: true, ..Default::default() };
    assert_eq!(InteractionMode::from_modifiers(m), InteractionMode::Idle);
}

// =============================================================
// GizmoMode
// =============================================================

#[test]
fn gizmo_mode_from_shortcut_keys() {
    assert_eq!(GizmoMode::from_key(&Key::from("g")), Some(GizmoMode::Translate));
    assert_eq!(GizmoMode::from_key(&Key::from("r")), Some(GizmoMode::Rotate));
    assert_eq!(GizmoMode::from_key(&Key::from("s")), Some(GizmoMode::Scale));
    assert_eq!(GizmoMode::from_key(&Key::from("Shift")), None);
    assert_eq!(GizmoMode::default(), GizmoMode::Translate);
}

#[test]
fn gizmo_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&GizmoMode::Rotate).unwrap(), "\"rotate\"");
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn pointer_from_client_maps_corners_and_center() {
    assert_eq!(Pointer::from_client(0.0, 0.0, 800.0, 600.0), Pointer::new(-1.0, 1.0));
    assert_eq!(Pointer::from_client(800.0, 600.0, 800.0, 600.0), Pointer::new(1.0, -1.0));
    assert_eq!(Pointer::from_client(400.0, 300.0, 800.0, 600.0), Pointer::new(0.0, 0.0));
}

#[test]
fn pointer_from_client_zero_viewport_is_origin() {
    assert_eq!(Pointer::from_client(10.0, 10.0, 0.0, 600.0), Pointer::default());
}

#[test]
fn modifiers_missing_flags_read_as_false() {
    let mods: Modifiers = serde_json::from_str(r#"{"shift": true}"#).unwrap();
    assert_eq!(mods, Modifiers { shift: true, ..Default::default() });
    let none: Modifiers = serde_json::from_str("{}").unwrap();
    assert_eq!(InteractionMode::from_modifiers(none), InteractionMode::Idle);
}
