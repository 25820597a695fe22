use trademap_model::Record;

use crate::catalog::ModelCatalog;
use crate::error::Result;
use crate::options::TransformOptions;
use crate::pipeline::{TransformOutcome, transform};

/// Runs transforms by config id against a catalog.
#[derive(Debug, Clone)]
pub struct Transformer<C> {
    catalog: C,
    options: TransformOptions,
}

impl<C: ModelCatalog> Transformer<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            options: TransformOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    /// Resolve `config_id` and its system model, then [`transform`].
    pub fn transform_by_id(&self, record: &Record, config_id: &str) -> Result<TransformOutcome> {
        let (config, model) = self.catalog.resolve(config_id)?;
        transform(record, config, model, &self.options)
    }
}
