//! Model catalog: equipment templates and their asset load status.
//!
//! DESIGN
//! ======
//! Every placeable model type is registered up front with its asset path,
//! import scale, and placement offset. The host loads assets asynchronously
//! and reports each one back as loaded (with an engine-side template handle)
//! or failed. Failures are isolated: only loaded models are selectable and
//! placeable, and interaction is enabled once every asset has settled.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MODEL_SCALE, DEFAULT_PLACEMENT_OFFSET};
use crate::cost::model_label;
use crate::error::SceneError;
use crate::math::Vec3;

/// Opaque engine-side handle to a loaded template scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateHandle(pub u64);

/// Load state of one model asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Pending,
    Loaded(TemplateHandle),
    Failed(String),
}

/// Static description of a model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSpec {
    pub key: String,
    pub asset: String,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub placement_offset: Vec3,
}

fn default_scale() -> Vec3 {
    Vec3::splat(DEFAULT_MODEL_SCALE)
}

impl ModelSpec {
    /// A model with the built-in scale and placement offset.
    #[must_use]
    pub fn builtin(key: &str) -> Self {
        let (x, y, z) = DEFAULT_PLACEMENT_OFFSET;
        Self { key: key.to_owned(), asset: format!("./{key}.glb"), scale: default_scale(), placement_offset: Vec3::new(x, y, z) }
    }
}

/// A catalog entry: the spec plus its load status.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTemplate {
    pub spec: ModelSpec,
    pub status: AssetStatus,
}

/// A loaded model ready for placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedModel<'a> {
    pub spec: &'a ModelSpec,
    pub handle: TemplateHandle,
}

/// Entry in the model selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub key: String,
    pub label: String,
}

/// Registry of model templates in registration order.
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    templates: Vec<ModelTemplate>,
    index: HashMap<String, usize>,
}

impl ModelCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model type. Re-registering a key replaces its spec and
    /// resets it to `Pending`.
    pub fn register(&mut self, spec: ModelSpec) {
        let template = ModelTemplate { spec, status: AssetStatus::Pending };
        if let Some(&idx) = self.index.get(&template.spec.key) {
            self.templates[idx] = template;
        } else {
            self.index.insert(template.spec.key.clone(), self.templates.len());
            self.templates.push(template);
        }
    }

    /// Record a successful asset load. Returns false for unregistered keys.
    pub fn mark_loaded(&mut self, key: &str, handle: TemplateHandle) -> bool {
        self.set_status(key, AssetStatus::Loaded(handle))
    }

    /// Record a failed asset load. Returns false for unregistered keys.
    pub fn mark_failed(&mut self, key: &str, reason: impl Into<String>) -> bool {
        self.set_status(key, AssetStatus::Failed(reason.into()))
    }

    fn set_status(&mut self, key: &str, status: AssetStatus) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };
        self.templates[idx].status = status;
        true
    }

    /// Mark every pending model loaded with sequential handles. Used where
    /// no rendering engine is present and only keys need to resolve.
    pub fn mark_all_loaded(&mut self) {
        for (i, template) in self.templates.iter_mut().enumerate() {
            if template.status == AssetStatus::Pending {
                template.status = AssetStatus::Loaded(TemplateHandle(i as u64));
            }
        }
    }

    /// Look up a template by key regardless of status.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ModelTemplate> {
        self.index.get(key).map(|&idx| &self.templates[idx])
    }

    /// Look up a model that is ready for placement.
    ///
    /// # Errors
    ///
    /// Returns `ModelNotLoaded` if the key is unknown, still pending, or failed.
    pub fn loaded(&self, key: &str) -> Result<LoadedModel<'_>, SceneError> {
        match self.get(key) {
            Some(ModelTemplate { spec, status: AssetStatus::Loaded(handle) }) => Ok(LoadedModel { spec, handle: *handle }),
            _ => Err(SceneError::ModelNotLoaded(key.to_owned())),
        }
    }

    #[must_use]
    pub fn is_loaded(&self, key: &str) -> bool {
        self.loaded(key).is_ok()
    }

    /// True once no asset is still pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.templates.iter().all(|t| t.status != AssetStatus::Pending)
    }

    /// Keys of loaded models in registration order.
    #[must_use]
    pub fn loaded_keys(&self) -> Vec<&str> {
        self.templates
            .iter()
            .filter(|t| matches!(t.status, AssetStatus::Loaded(_)))
            .map(|t| t.spec.key.as_str())
            .collect()
    }

    /// Selector options for loaded models.
    #[must_use]
    pub fn options(&self) -> Vec<ModelOption> {
        self.loaded_keys()
            .into_iter()
            .map(|key| ModelOption { key: key.to_owned(), label: model_label(key) })
            .collect()
    }

    /// All templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &ModelTemplate> {
        self.templates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<ModelSpec> for ModelCatalog {
    fn from_iter<I: IntoIterator<Item = ModelSpec>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for spec in iter {
            catalog.register(spec);
        }
        catalog
    }
}
