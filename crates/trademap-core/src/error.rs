//! Error types for end-to-end transforms.

use thiserror::Error;

use trademap_model::{DataType, ModelError};
use trademap_validate::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("mapping config '{config_id}' references unknown system model '{system_model_id}'")]
    UnknownReference {
        config_id: String,
        system_model_id: String,
    },
    #[error("unknown mapping config '{config_id}'")]
    UnknownMappingConfig { config_id: String },
    #[error("required field '{field}' is missing (system model '{model_id}')")]
    RequiredFieldMissing { model_id: String, field: String },
    #[error("field '{field}' expects {expected} but holds {found} (system model '{model_id}')")]
    TypeMismatch {
        model_id: String,
        field: String,
        expected: DataType,
        found: String,
    },
    #[error(transparent)]
    InvalidModel(#[from] ModelError),
}

impl From<ValidationError> for TransformError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::RequiredFieldMissing { model_id, field } => {
                Self::RequiredFieldMissing { model_id, field }
            }
            ValidationError::TypeMismatch {
                model_id,
                field,
                expected,
                found,
            } => Self::TypeMismatch {
                model_id,
                field,
                expected,
                found,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
