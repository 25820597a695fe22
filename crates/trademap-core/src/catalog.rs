//! Lookup of system models and mapping configs by id.

use std::collections::BTreeMap;

use tracing::debug;

use trademap_model::{MappingConfig, SystemModel};

use crate::error::{Result, TransformError};

/// Read access to stored models and configs.
pub trait ModelCatalog {
    fn system_model(&self, id: &str) -> Option<&SystemModel>;

    fn mapping_config(&self, id: &str) -> Option<&MappingConfig>;

    /// Resolve a config together with the model it references.
    fn resolve(&self, config_id: &str) -> Result<(&MappingConfig, &SystemModel)> {
        let config =
            self.mapping_config(config_id)
                .ok_or_else(|| TransformError::UnknownMappingConfig {
                    config_id: config_id.to_string(),
                })?;
        let model = self.system_model(&config.system_model_id).ok_or_else(|| {
            TransformError::UnknownReference {
                config_id: config.id.clone(),
                system_model_id: config.system_model_id.clone(),
            }
        })?;
        Ok((config, model))
    }
}

/// Catalog held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    models: BTreeMap<String, SystemModel>,
    configs: BTreeMap<String, MappingConfig>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a model after checking its field names are unique.
    pub fn register_model(&mut self, model: SystemModel) -> Result<()> {
        model.check()?;
        debug!(model = %model.id, version = %model.version, "system model registered");
        self.models.insert(model.id.clone(), model);
        Ok(())
    }

    /// Add or replace a config. Its model must already be registered and declare every
    /// target field.
    pub fn register_config(&mut self, config: MappingConfig) -> Result<()> {
        let model = self.models.get(&config.system_model_id).ok_or_else(|| {
            TransformError::UnknownReference {
                config_id: config.id.clone(),
                system_model_id: config.system_model_id.clone(),
            }
        })?;
        config.check_targets(model)?;
        debug!(config = %config.id, model = %model.id, "mapping config registered");
        self.configs.insert(config.id.clone(), config);
        Ok(())
    }

    /// Configs referencing the removed model stay registered and fail on use.
    pub fn remove_model(&mut self, id: &str) -> Option<SystemModel> {
        self.models.remove(id)
    }

    pub fn remove_config(&mut self, id: &str) -> Option<MappingConfig> {
        self.configs.remove(id)
    }

    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn config_ids(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}

impl ModelCatalog for InMemoryCatalog {
    fn system_model(&self, id: &str) -> Option<&SystemModel> {
        self.models.get(id)
    }

    fn mapping_config(&self, id: &str) -> Option<&MappingConfig> {
        self.configs.get(id)
    }
}
