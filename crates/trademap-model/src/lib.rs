//! Data model for bank trade mapping.
//!
//! - **value**: the closed [`Value`] union and the open [`Record`] map
//! - **schema**: canonical target schemas ([`SystemModel`], [`FieldDefinition`])
//! - **mapping**: per-bank mapping configurations ([`MappingConfig`], [`FieldMapping`])
//! - **rule**: the closed set of transformation operators ([`TransformationRule`])

pub mod error;
pub mod mapping;
pub mod rule;
pub mod schema;
pub mod value;

pub use error::{ModelError, Result};
pub use mapping::{FieldMapping, MappingConfig};
pub use rule::{
    BooleanConvertParams, CaseParams, CaseType, ConcatParams, CountParams, EnumMapParams,
    FormatDateParams, GroupRef, NumericFormatParams, OperatorKind, RegexParams, ReplaceParams,
    SplitParams, SubstringParams, TransformationRule,
};
pub use schema::{DataType, FieldDefinition, SystemModel};
pub use value::{Record, Value};
