#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn hit(target: HitTarget, distance: f64) -> Hit {
    Hit { target, point: Vec3::ZERO, normal: Vec3::new(0.0, 1.0, 0.0), distance }
}

// =============================================================
// HitTarget
// =============================================================

#[test]
fn floor_and_walls_are_structural() {
    assert!(HitTarget::Floor.is_structural());
    for side in WallSide::ALL {
        assert!(HitTarget::Wall { side }.is_structural());
    }
    assert!(!HitTarget::Object { id: Uuid::new_v4() }.is_structural());
}

#[test]
fn object_id_only_for_objects() {
    let id = Uuid::new_v4();
    assert_eq!(HitTarget::Object { id }.object_id(), Some(id));
    assert_eq!(HitTarget::Floor.object_id(), None);
    assert_eq!(HitTarget::Wall { side: WallSide::Back }.object_id(), None);
}

#[test]
fn hit_target_serde_is_tagged() {
    let json = serde_json::to_value(HitTarget::Wall { side: WallSide::Left }).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "wall", "side": "left"}));
    let back: HitTarget = serde_json::from_value(serde_json::json!({"kind": "floor"})).unwrap();
    assert_eq!(back, HitTarget::Floor);
}

// =============================================================
// nearest
// =============================================================

#[test]
fn nearest_picks_smallest_distance_regardless_of_order() {
    let id = Uuid::new_v4();
    let hits = [hit(HitTarget::Floor, 30.0), hit(HitTarget::Object { id }, 12.0), hit(HitTarget::Wall { side: WallSide::Front }, 50.0)];
    assert_eq!(nearest(&hits).unwrap().target, HitTarget::Object { id });
}

#[test]
fn nearest_of_empty_is_none() {
    assert!(nearest(&[]).is_none());
}

#[test]
fn nearest_ignores_nan_distances() {
    let hits = [hit(HitTarget::Object { id: Uuid::new_v4() }, f64::NAN), hit(HitTarget::Floor, 5.0)];
    assert_eq!(nearest(&hits).unwrap().target, HitTarget::Floor);
}

// =============================================================
// PrecomputedHits
// =============================================================

#[test]
fn precomputed_hits_ignore_pointer() {
    let caster = PrecomputedHits(vec![hit(HitTarget::Floor, 1.0)]);
    assert_eq!(caster.cast(Pointer::new(0.5, -0.5)).len(), 1);
    assert!(PrecomputedHits::default().cast(Pointer::new(0.0, 0.0)).is_empty());
}
