#![allow(clippy::float_cmp)]

use scene::error::SceneError;
use serde_json::{Value, json};

use super::*;

fn record(key: &str, x: f64) -> Value {
    json!({
        "modelKey": key,
        "position": {"x": x, "y": 3, "z": 25},
        "rotation": {"x": 0, "y": 0, "z": 0},
        "scale": {"x": 100, "y": 100, "z": 100},
    })
}

fn document(models: Vec<Value>) -> String {
    json!({"room": {"width": 800, "depth": 600, "height": 250}, "models": models}).to_string()
}

// =============================================================================
// report
// =============================================================================

#[test]
fn report_prices_arm_and_skips_pallet() {
    let config = EditorConfig::default();
    let text = document(vec![record("arm", 25.0), record("pallete", 75.0)]);
    let out = report(&config, &text, Format::Json).unwrap();
    let report: CostReport = serde_json::from_str(&out).unwrap();
    assert_eq!(report.total, 15_000.0);
    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].label, "arm");
}

#[test]
fn report_text_ends_with_total() {
    let config = EditorConfig::default();
    let text = document(vec![record("arm_kurze_schiene", 25.0)]);
    let out = report(&config, &text, Format::Text).unwrap();
    let last = out.lines().last().unwrap();
    assert!(last.starts_with("total"));
    assert!(last.ends_with("21000.00"));
    assert!(out.contains("arm kurze schiene"));
}

#[test]
fn report_ignores_prices_in_document() {
    let config = EditorConfig::default();
    let mut rec = record("tisch", 25.0);
    rec["cost"] = json!(1);
    let out = report(&config, &document(vec![rec]), Format::Json).unwrap();
    let report: CostReport = serde_json::from_str(&out).unwrap();
    assert_eq!(report.total, 900.0);
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_lists_skipped_records() {
    let config = EditorConfig::default();
    let text = document(vec![record("arm", 25.0), record("hovercraft", 75.0)]);
    let out = check(&config, &text, false).unwrap();
    assert!(out.contains("room: 800 x 600 x 250"));
    assert!(out.contains("models: 1 accepted, 1 skipped"));
    assert!(out.contains("#1 E_UNKNOWN_MODEL"));
}

#[test]
fn check_strict_fails_on_skipped() {
    let config = EditorConfig::default();
    let text = document(vec![record("hovercraft", 75.0)]);
    let err = check(&config, &text, true).unwrap_err();
    assert!(matches!(err, CliError::SkippedRecords(1)));
}

#[test]
fn check_reports_legacy_document() {
    let config = EditorConfig::default();
    let text = json!([record("arm", 25.0)]).to_string();
    let out = check(&config, &text, true).unwrap();
    assert!(out.contains("legacy"));
}

#[test]
fn check_structural_error_fails() {
    let config = EditorConfig::default();
    let err = check(&config, r#"{"room": {"width": 0, "depth": 1, "height": 1}, "models": []}"#, false).unwrap_err();
    assert!(matches!(err, CliError::Scene(SceneError::InvalidRoomData { .. })));
    assert_eq!(err.error_code(), "E_INVALID_ROOM_DATA");
}

// =============================================================================
// normalize
// =============================================================================

#[test]
fn normalize_legacy_adds_configured_room() {
    let config = EditorConfig::default();
    let text = json!([record("arm", 25.0), record("hovercraft", 75.0)]).to_string();
    let out = normalize(&config, &text).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["room"], json!({"width": 1000.0, "depth": 1000.0, "height": 200.0}));
    assert_eq!(value["models"].as_array().unwrap().len(), 1);
    assert_eq!(value["models"][0]["modelKey"], "arm");
}

#[test]
fn normalize_is_stable() {
    let config = EditorConfig::default();
    let once = normalize(&config, &document(vec![record("arm", 25.0), record("tisch", 75.0)])).unwrap();
    let twice = normalize(&config, &once).unwrap();
    assert_eq!(once, twice);
}

// =============================================================================
// catalog
// =============================================================================

#[test]
fn catalog_json_lists_every_model() {
    let config = EditorConfig::default();
    let out = catalog(&config, Format::Json).unwrap();
    let rows: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.len(), config.models.len());
    let pallet = rows.iter().find(|r| r["key"] == "pallete").unwrap();
    assert_eq!(pallet["excludedFromTotal"], true);
    assert_eq!(rows[0]["placementOffset"], json!({"x": 8.0, "y": -22.0, "z": 0.0}));
}

#[test]
fn catalog_text_marks_excluded() {
    let out = catalog(&EditorConfig::default(), Format::Text).unwrap();
    let line = out.lines().find(|l| l.starts_with("pallete")).unwrap();
    assert!(line.ends_with("(not in total)"));
}

// =============================================================================
// snap
// =============================================================================

#[test]
fn snap_without_model_lands_on_cell_center() {
    let config = EditorConfig::default();
    let p = snap(&config, Vec3::new(12.0, 0.0, -3.0), Vec3::new(0.0, 1.0, 0.0), None).unwrap();
    assert_eq!(p, Vec3::new(25.0, 25.0, -25.0));
}

#[test]
fn snap_with_model_applies_offset() {
    let config = EditorConfig::default();
    let p = snap(&config, Vec3::new(12.0, 0.0, 70.0), Vec3::new(0.0, 1.0, 0.0), Some("arm")).unwrap();
    assert_eq!(format_vec3(p), "33,3,75");
}

#[test]
fn snap_unknown_model_fails() {
    let config = EditorConfig::default();
    let err = snap(&config, Vec3::ZERO, Vec3::ZERO, Some("hovercraft")).unwrap_err();
    assert!(matches!(err, CliError::UnknownModel(ref key) if key == "hovercraft"));
}

#[test]
fn parse_vec3_accepts_spaces_and_negatives() {
    assert_eq!(parse_vec3("1, -2.5 ,3").unwrap(), Vec3::new(1.0, -2.5, 3.0));
}

#[test]
fn parse_vec3_rejects_bad_input() {
    assert!(parse_vec3("1,2").is_err());
    assert!(parse_vec3("1,2,x").is_err());
    assert!(parse_vec3("1,2,inf").is_err());
}
