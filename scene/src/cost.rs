//! Equipment pricing and the cost list shown next to the scene.
//!
//! Prices are static configuration: a placed object's cost is looked up
//! from the table when the object enters the registry (placement or
//! import) and never read back from an interchange document.

#[cfg(test)]
#[path = "cost_test.rs"]
mod cost_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::doc::PlacedObject;

/// Model key of the pallet, which is left out of totals by default.
pub const PALLET_KEY: &str = "pallete";

/// Built-in price list: `(model key, cost)`.
pub const BUILTIN_COSTS: &[(&str, f64)] = &[
    ("arm", 15_000.0),
    ("arm_kurze_schiene", 21_000.0),
    ("arm_lange_schiene", 26_500.0),
    ("förderband", 4_200.0),
    ("förderband_hoch", 5_800.0),
    ("stütze", 650.0),
    ("mehrarm_einheit", 39_000.0),
    ("palettierer", 31_000.0),
    (PALLET_KEY, 0.0),
    ("tisch", 900.0),
];

/// Static mapping from model key to cost.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    costs: HashMap<String, f64>,
}

impl CostTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in price list.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_COSTS.iter().map(|&(key, cost)| (key.to_owned(), cost)).collect()
    }

    /// Set the cost for `key`. Negative or non-finite costs are clamped to 0.
    pub fn insert(&mut self, key: impl Into<String>, cost: f64) {
        let cost = if cost.is_finite() && cost > 0.0 { cost } else { 0.0 };
        self.costs.insert(key.into(), cost);
    }

    /// Cost for `key`, or 0 when the key is not priced.
    #[must_use]
    pub fn lookup_cost(&self, key: &str) -> f64 {
        self.costs.get(key).copied().unwrap_or(0.0)
    }

    /// Whether `key` has an explicit price.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.costs.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl FromIterator<(String, f64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, cost) in iter {
            table.insert(key, cost);
        }
        table
    }
}

/// Which model keys are left out of the displayed cost list and total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostPolicy {
    excluded: HashSet<String>,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self::excluding([PALLET_KEY])
    }
}

impl CostPolicy {
    /// A policy that counts every model.
    #[must_use]
    pub fn include_all() -> Self {
        Self { excluded: HashSet::new() }
    }

    /// A policy that skips the given keys.
    #[must_use]
    pub fn excluding<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { excluded: keys.into_iter().map(Into::into).collect() }
    }

    #[must_use]
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }
}

/// One row of the cost list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub label: String,
    pub model_key: String,
    pub cost: f64,
}

/// Ordered cost list plus its total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostReport {
    pub lines: Vec<CostLine>,
    pub total: f64,
}

impl CostReport {
    /// Build the report for `objects` in the order given.
    #[must_use]
    pub fn build<'a>(objects: impl IntoIterator<Item = &'a PlacedObject>, policy: &CostPolicy) -> Self {
        let lines: Vec<CostLine> = objects
            .into_iter()
            .filter(|obj| !policy.is_excluded(&obj.model_key))
            .map(|obj| CostLine { label: model_label(&obj.model_key), model_key: obj.model_key.clone(), cost: obj.cost })
            .collect();
        let total = lines.iter().map(|line| line.cost).sum();
        Self { lines, total }
    }
}

/// Human-readable label for a model key (`arm_kurze_schiene` → `arm kurze schiene`).
#[must_use]
pub fn model_label(key: &str) -> String {
    key.replace('_', " ")
}
