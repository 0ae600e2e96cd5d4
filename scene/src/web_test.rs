#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn room_text_applies_trimmed_numbers() {
    let mut editor = Editor::default();
    let out = set_room_from_text(&mut editor, " 600", "400 ", "300");
    assert!(matches!(out.first(), Some(Action::RoomChanged { .. })));
    assert_eq!(editor.room(), RoomDimensions { width: 600.0, depth: 400.0, height: 300.0 });
}

#[test]
fn room_text_unparseable_becomes_error_notice() {
    let mut editor = Editor::default();
    let out = set_room_from_text(&mut editor, "600", "deep", "300");
    let [Action::Notify { notice }] = out.as_slice() else {
        panic!("expected a single notice, got {out:?}");
    };
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.code, "E_INVALID_ROOM_DATA");
    assert!(notice.message.contains("depth"));
    assert_eq!(editor.room(), RoomDimensions::default());
}

#[test]
fn count_clamps_non_finite_and_negative() {
    assert_eq!(to_count(f64::NAN), 0);
    assert_eq!(to_count(-5.0), 0);
    assert_eq!(to_count(1234.9), 1234);
}
