//! Error types for validation.

use thiserror::Error;

use trademap_model::DataType;

/// Fatal validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{field}' is missing (system model '{model_id}')")]
    RequiredFieldMissing { model_id: String, field: String },
    /// Only raised in strict mode.
    #[error("field '{field}' expects {expected} but holds {found} (system model '{model_id}')")]
    TypeMismatch {
        model_id: String,
        field: String,
        expected: DataType,
        found: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::RequiredFieldMissing { field, .. } | Self::TypeMismatch { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
