use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Declared type of a system model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Integer,
    Decimal,
    Boolean,
    Date,
    Enum,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::String,
        DataType::Integer,
        DataType::Decimal,
        DataType::Boolean,
        DataType::Date,
        DataType::Enum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Decimal => "decimal",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::Enum => "enum",
        }
    }

    /// Integer and decimal fields share one conformance rule.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Decimal)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Case-insensitive parse of a data type tag.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.as_str() == normalized)
            .ok_or_else(|| format!("Unknown data type: {s}"))
    }
}

/// One field of a system model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Open constraint table, e.g. `{"values": ["BUY", "SELL"]}` for enums.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<BTreeMap<String, serde_json::Value>>,
}

impl FieldDefinition {
    /// An optional field without description or constraints.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            description: None,
            required: false,
            constraints: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|value| serde_json::Value::String(value.into()))
            .collect();
        self.constraints
            .get_or_insert_with(BTreeMap::new)
            .insert("values".to_string(), serde_json::Value::Array(values));
        self
    }

    /// The `values` constraint as strings, if declared.
    ///
    /// Non-string entries are rendered with their JSON text so numeric codes still compare.
    pub fn allowed_values(&self) -> Option<Vec<String>> {
        let values = self.constraints.as_ref()?.get("values")?.as_array()?;
        Some(
            values
                .iter()
                .map(|value| match value {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }
}

/// A canonical target schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemModel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    pub fields: Vec<FieldDefinition>,
}

impl SystemModel {
    /// Build a model, rejecting duplicate field names.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Result<Self> {
        let model = Self {
            id: id.into(),
            name: name.into(),
            description: None,
            version: version.into(),
            fields,
        };
        model.check()?;
        Ok(model)
    }

    /// Verify that field names are unique.
    ///
    /// Deserialized models are not checked automatically; callers that accept models from
    /// outside should run this before use.
    pub fn check(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ModelError::DuplicateField {
                    model_id: self.id.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| field.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_from_str() {
        assert_eq!("Decimal".parse::<DataType>().unwrap(), DataType::Decimal);
        assert_eq!(" enum ".parse::<DataType>().unwrap(), DataType::Enum);
        assert!("number".parse::<DataType>().is_err());
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let result = SystemModel::new(
            "fx",
            "FX Forward",
            "1.0.0",
            vec![
                FieldDefinition::new("tradeId", DataType::String),
                FieldDefinition::new("tradeId", DataType::Integer),
            ],
        );
        assert_eq!(
            result.unwrap_err(),
            ModelError::DuplicateField {
                model_id: "fx".to_string(),
                field: "tradeId".to_string(),
            }
        );
    }

    #[test]
    fn allowed_values_reads_constraints() {
        let field = FieldDefinition::new("direction", DataType::Enum)
            .with_allowed_values(["BUY", "SELL"]);
        assert_eq!(
            field.allowed_values(),
            Some(vec!["BUY".to_string(), "SELL".to_string()])
        );
        assert_eq!(FieldDefinition::new("x", DataType::Enum).allowed_values(), None);
    }

    #[test]
    fn field_definition_defaults_when_deserialized() {
        let field: FieldDefinition =
            serde_json::from_str(r#"{"name": "amount", "data_type": "decimal"}"#).unwrap();
        assert!(!field.required);
        assert_eq!(field.data_type, DataType::Decimal);
        assert!(field.constraints.is_none());
    }
}
