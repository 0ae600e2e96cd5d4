//! Editor configuration: model types, prices, total policy, initial room.
//!
//! The built-in configuration is [`EditorConfig::default`]. Hosts may ship
//! an alternative as JSON (camelCase keys); missing sections fall back to
//! the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{ModelCatalog, ModelSpec};
use crate::cost::{BUILTIN_COSTS, CostPolicy, CostTable, PALLET_KEY};
use crate::error::SceneError;
use crate::room::RoomDimensions;

/// One configured model type with its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEntry {
    #[serde(flatten)]
    pub spec: ModelSpec,
    #[serde(default)]
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub models: Vec<ModelEntry>,
    pub excluded_from_total: Vec<String>,
    pub room: RoomDimensions,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            models: BUILTIN_COSTS
                .iter()
                .map(|&(key, cost)| ModelEntry { spec: ModelSpec::builtin(key), cost })
                .collect(),
            excluded_from_total: vec![PALLET_KEY.to_owned()],
            room: RoomDimensions::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not a valid config document,
    /// a model key is empty or repeated, or the room is invalid.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        let config: Self = serde_json::from_str(text).map_err(|e| SceneError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check keys are non-empty and unique, costs non-negative, and the room valid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.models {
            let key = entry.spec.key.as_str();
            if key.is_empty() {
                return Err(SceneError::InvalidConfig("model key must not be empty".into()));
            }
            if !seen.insert(key) {
                return Err(SceneError::InvalidConfig(format!("duplicate model key `{key}`")));
            }
            if !(entry.cost.is_finite() && entry.cost >= 0.0) {
                return Err(SceneError::InvalidConfig(format!("cost for `{key}` must be a non-negative number")));
            }
        }
        self.room.validate().map_err(|e| SceneError::InvalidConfig(e.to_string()))
    }

    /// Catalog with every configured model registered as pending.
    #[must_use]
    pub fn catalog(&self) -> ModelCatalog {
        self.models.iter().map(|entry| entry.spec.clone()).collect()
    }

    #[must_use]
    pub fn cost_table(&self) -> CostTable {
        self.models.iter().map(|entry| (entry.spec.key.clone(), entry.cost)).collect()
    }

    #[must_use]
    pub fn cost_policy(&self) -> CostPolicy {
        CostPolicy::excluding(self.excluded_from_total.iter().cloned())
    }
}
