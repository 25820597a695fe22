use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("field '{field}' is defined more than once in system model '{model_id}'")]
    DuplicateField { model_id: String, field: String },
    #[error("target field '{field}' not found in system model '{model_id}'")]
    UnknownTargetField { model_id: String, field: String },
    #[error("mapping config '{config_id}' references system model '{expected}', got '{actual}'")]
    ModelMismatch {
        config_id: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
