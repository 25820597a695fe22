use serde::{Deserialize, Serialize};

use trademap_validate::ValidationOptions;

/// Options for [`transform`](crate::transform).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub validation: ValidationOptions,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type mismatches fail the transform.
    pub fn strict() -> Self {
        Self {
            validation: ValidationOptions::strict(),
        }
    }

    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }
}
