//! Subcommand implementations.
//!
//! Each command takes its already-read input and returns the text to print,
//! so `main` owns all I/O.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use scene::codec::{self, DecodedScene};
use scene::config::EditorConfig;
use scene::cost::{CostReport, model_label};
use scene::doc::SceneRegistry;
use scene::error::ErrorCode;
use scene::grid;
use scene::math::Vec3;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::headless_catalog;
use crate::error::CliError;

/// Output format shared by the reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

fn decode(config: &EditorConfig, text: &str) -> Result<DecodedScene, CliError> {
    let decoded = codec::decode(text, &headless_catalog(config), &config.cost_table())?;
    info!(models = decoded.objects.len(), skipped = decoded.skipped.len(), "document decoded");
    Ok(decoded)
}

// =============================================================================
// REPORT
// =============================================================================

/// Cost list and total for a document, priced from the current config.
///
/// # Errors
///
/// Returns a scene error if the document is structurally invalid.
pub fn report(config: &EditorConfig, text: &str, format: Format) -> Result<String, CliError> {
    let decoded = decode(config, text)?;
    let report = CostReport::build(&decoded.objects, &config.cost_policy());
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&report)?),
        Format::Text => {
            let mut out = String::new();
            for line in &report.lines {
                out.push_str(&format!("{:<24} {:>12.2}\n", line.label, line.cost));
            }
            out.push_str(&format!("{:<24} {:>12.2}\n", "total", report.total));
            Ok(out)
        }
    }
}

// =============================================================================
// CHECK
// =============================================================================

/// Validate a document. Structural errors fail; skipped records are listed
/// and only fail under `strict`.
///
/// # Errors
///
/// Returns a scene error for structural problems, or `SkippedRecords` when
/// `strict` is set and any record would be dropped on import.
pub fn check(config: &EditorConfig, text: &str, strict: bool) -> Result<String, CliError> {
    let decoded = decode(config, text)?;
    let mut out = String::new();
    match decoded.room {
        Some(room) => out.push_str(&format!("room: {} x {} x {}\n", room.width, room.depth, room.height)),
        None => out.push_str("room: absent (legacy document)\n"),
    }
    out.push_str(&format!("models: {} accepted, {} skipped\n", decoded.objects.len(), decoded.skipped.len()));
    for skipped in &decoded.skipped {
        out.push_str(&format!("  #{} {}: {}\n", skipped.index, skipped.error.error_code(), skipped.error));
    }

    if strict && !decoded.skipped.is_empty() {
        warn!(skipped = decoded.skipped.len(), "strict check failed");
        return Err(CliError::SkippedRecords(decoded.skipped.len()));
    }
    Ok(out)
}

// =============================================================================
// NORMALIZE
// =============================================================================

/// Re-encode a document in canonical form: object document with a room,
/// two-space indent, unknown or malformed records dropped. Legacy documents
/// get the configured room.
///
/// # Errors
///
/// Returns a scene error if the document is structurally invalid.
pub fn normalize(config: &EditorConfig, text: &str) -> Result<String, CliError> {
    let decoded = decode(config, text)?;
    let mut registry = SceneRegistry::with_room(decoded.room.unwrap_or(config.room));
    registry.replace_all(decoded.objects);
    Ok(codec::encode(&registry)?)
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRow<'a> {
    key: &'a str,
    label: String,
    cost: f64,
    excluded_from_total: bool,
    scale: Vec3,
    placement_offset: Vec3,
}

/// Configured model types with price and placement parameters.
///
/// # Errors
///
/// Returns `Json` if the JSON rendering fails.
pub fn catalog(config: &EditorConfig, format: Format) -> Result<String, CliError> {
    let policy = config.cost_policy();
    let rows: Vec<CatalogRow<'_>> = config
        .models
        .iter()
        .map(|entry| CatalogRow {
            key: &entry.spec.key,
            label: model_label(&entry.spec.key),
            cost: entry.cost,
            excluded_from_total: policy.is_excluded(&entry.spec.key),
            scale: entry.spec.scale,
            placement_offset: entry.spec.placement_offset,
        })
        .collect();

    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&rows)?),
        Format::Text => {
            let mut out = String::new();
            for row in &rows {
                let marker = if row.excluded_from_total { " (not in total)" } else { "" };
                out.push_str(&format!(
                    "{:<20} {:>10.2}  offset {}{marker}\n",
                    row.key,
                    row.cost,
                    format_vec3(row.placement_offset)
                ));
            }
            Ok(out)
        }
    }
}

// =============================================================================
// SNAP
// =============================================================================

/// Placement position for an impact at `point` with surface `normal`,
/// using `model`'s placement offset when given.
///
/// # Errors
///
/// Returns `UnknownModel` if `model` is not configured.
pub fn snap(config: &EditorConfig, point: Vec3, normal: Vec3, model: Option<&str>) -> Result<Vec3, CliError> {
    let offset = match model {
        Some(key) => {
            let entry = config.models.iter().find(|entry| entry.spec.key == key);
            let Some(entry) = entry else {
                return Err(CliError::UnknownModel(key.to_owned()));
            };
            Some(entry.spec.placement_offset)
        }
        None => None,
    };
    Ok(grid::snap(point, normal, offset))
}

/// `x,y,z` with no padding; integral values print without a fraction.
#[must_use]
pub fn format_vec3(v: Vec3) -> String {
    format!("{},{},{}", v.x, v.y, v.z)
}

/// Parse `x,y,z` into a vector.
///
/// # Errors
///
/// Returns a message naming the problem, for clap to report.
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got `{s}`"));
    };
    let component = |raw: &str| raw.parse::<f64>().map_err(|e| format!("`{raw}`: {e}"));
    let v = Vec3::new(component(*x)?, component(*y)?, component(*z)?);
    if v.is_finite() { Ok(v) } else { Err(format!("`{s}` has a non-finite component")) }
}
