//! Bank-to-system mapping configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::rule::TransformationRule;
use crate::schema::{FieldDefinition, SystemModel};

/// Maps one source field onto one system model field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Key expected in the input record.
    pub source_field: String,
    /// Field name in the referenced system model.
    pub target_field: String,
    /// Optional operator applied to the source value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<TransformationRule>,
}

impl FieldMapping {
    pub fn new(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            transformation: None,
        }
    }

    pub fn with_transformation(mut self, rule: TransformationRule) -> Self {
        self.transformation = Some(rule);
        self
    }
}

/// A bank's mapping into one system model.
///
/// Mappings apply in order. Several mappings may target the same field; the last one whose
/// source is present wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub bank_id: String,
    /// Weak reference; may dangle once the model is deleted.
    pub system_model_id: String,
    /// Fields discovered in the bank's sample file, if one was inspected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_fields: Vec<FieldDefinition>,
    pub mappings: Vec<FieldMapping>,
}

impl MappingConfig {
    pub fn new(
        id: impl Into<String>,
        bank_id: impl Into<String>,
        system_model_id: impl Into<String>,
        mappings: Vec<FieldMapping>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: None,
            bank_id: bank_id.into(),
            system_model_id: system_model_id.into(),
            source_fields: Vec::new(),
            mappings,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Save-time check: the model is the referenced one and every target exists in it.
    pub fn check_targets(&self, model: &SystemModel) -> Result<()> {
        if model.id != self.system_model_id {
            return Err(ModelError::ModelMismatch {
                config_id: self.id.clone(),
                expected: self.system_model_id.clone(),
                actual: model.id.clone(),
            });
        }
        for mapping in &self.mappings {
            if !model.has_field(&mapping.target_field) {
                return Err(ModelError::UnknownTargetField {
                    model_id: model.id.clone(),
                    field: mapping.target_field.clone(),
                });
            }
        }
        Ok(())
    }

    /// Target fields in mapping order, duplicates included.
    pub fn target_fields(&self) -> impl Iterator<Item = &str> {
        self.mappings
            .iter()
            .map(|mapping| mapping.target_field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DataType;

    fn model() -> SystemModel {
        SystemModel::new(
            "fx-forward-v1",
            "FX Forward",
            "1.0.0",
            vec![
                FieldDefinition::new("tradeId", DataType::String).required(),
                FieldDefinition::new("amount", DataType::Decimal),
            ],
        )
        .unwrap()
    }

    #[test]
    fn check_targets_accepts_known_fields() {
        let config = MappingConfig::new(
            "cfg",
            "bank-a",
            "fx-forward-v1",
            vec![
                FieldMapping::new("Ref", "tradeId"),
                FieldMapping::new("Amt", "amount"),
            ],
        );
        assert!(config.check_targets(&model()).is_ok());
    }

    #[test]
    fn check_targets_rejects_unknown_field() {
        let config = MappingConfig::new(
            "cfg",
            "bank-a",
            "fx-forward-v1",
            vec![FieldMapping::new("Px", "price")],
        );
        assert_eq!(
            config.check_targets(&model()).unwrap_err(),
            ModelError::UnknownTargetField {
                model_id: "fx-forward-v1".to_string(),
                field: "price".to_string(),
            }
        );
    }

    #[test]
    fn check_targets_rejects_other_model() {
        let config = MappingConfig::new("cfg", "bank-a", "swap-v2", vec![]);
        assert!(matches!(
            config.check_targets(&model()),
            Err(ModelError::ModelMismatch { .. })
        ));
    }
}
