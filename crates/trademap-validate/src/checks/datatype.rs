//! Data type conformance.
//!
//! Null and blank values are not type errors. Fields absent from the schema are ignored.

use trademap_model::{DataType, Record, SystemModel, Value};

use crate::issue::Issue;

pub fn check(record: &Record, schema: &SystemModel) -> Vec<Issue> {
    let mut issues = Vec::new();

    for field in &schema.fields {
        let Some(value) = record.get(&field.name) else {
            continue;
        };
        if value.is_empty() || conforms(value, field.data_type) {
            continue;
        }
        issues.push(Issue::TypeMismatch {
            field: field.name.clone(),
            expected: field.data_type,
            found: value.type_name().to_string(),
        });
    }

    issues
}

fn conforms(value: &Value, data_type: DataType) -> bool {
    match data_type {
        DataType::String => matches!(value, Value::String(_)),
        DataType::Integer | DataType::Decimal => value.as_f64().is_some(),
        DataType::Boolean => true,
        DataType::Date => matches!(value, Value::DateTime(_) | Value::String(_)),
        // Membership is its own check.
        DataType::Enum => true,
    }
}
