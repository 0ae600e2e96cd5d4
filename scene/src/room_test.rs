#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// RoomDimensions
// =============================================================

#[test]
fn default_room_is_1000_by_1000_by_200() {
    let room = RoomDimensions::default();
    assert_eq!((room.width, room.depth, room.height), (1000.0, 1000.0, 200.0));
    assert!(room.validate().is_ok());
}

#[test]
fn new_accepts_positive_dimensions() {
    let room = RoomDimensions::new(600.0, 400.0, 250.0).unwrap();
    assert_eq!(room.depth, 400.0);
}

#[test]
fn new_rejects_zero_negative_and_nan() {
    let cases = [
        ((0.0, 1.0, 1.0), RoomField::Width),
        ((1.0, -5.0, 1.0), RoomField::Depth),
        ((1.0, 1.0, f64::NAN), RoomField::Height),
        ((1.0, 1.0, f64::INFINITY), RoomField::Height),
    ];
    for ((w, d, h), expected) in cases {
        let err = RoomDimensions::new(w, d, h).unwrap_err();
        assert!(matches!(err, SceneError::InvalidRoomData { field } if field == expected));
    }
}

#[test]
fn parse_trims_and_rejects_text() {
    let room = RoomDimensions::parse(" 800", "900 ", "300").unwrap();
    assert_eq!(room, RoomDimensions { width: 800.0, depth: 900.0, height: 300.0 });

    let err = RoomDimensions::parse("800", "900", "tall").unwrap_err();
    assert!(matches!(err, SceneError::InvalidRoomData { field: RoomField::Height }));
}

// =============================================================
// wall_layout
// =============================================================

#[test]
fn wall_layout_places_four_slabs_around_origin() {
    let room = RoomDimensions::new(1000.0, 600.0, 200.0).unwrap();
    let walls = wall_layout(&room);

    assert_eq!(walls.len(), 4);
    assert_eq!(walls[0].side, WallSide::Back);
    assert_eq!(walls[0].position, Vec3::new(0.0, 100.0, 300.0));
    assert_eq!(walls[0].size, Vec3::new(1000.0, 200.0, 10.0));

    assert_eq!(walls[1].side, WallSide::Front);
    assert_eq!(walls[1].position, Vec3::new(0.0, 100.0, -300.0));

    assert_eq!(walls[2].side, WallSide::Right);
    assert_eq!(walls[2].position, Vec3::new(500.0, 100.0, 0.0));
    assert_eq!(walls[2].size, Vec3::new(10.0, 200.0, 600.0));

    assert_eq!(walls[3].side, WallSide::Left);
    assert_eq!(walls[3].position, Vec3::new(-500.0, 100.0, 0.0));
}

#[test]
fn texture_repeat_scales_with_room() {
    let room = RoomDimensions::new(1000.0, 600.0, 300.0).unwrap();
    assert_eq!(texture_repeat(&room), (5.0, 1.5));
}

#[test]
fn wall_side_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&WallSide::Left).unwrap(), "\"left\"");
}
