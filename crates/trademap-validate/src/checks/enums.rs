//! Enum membership against the `values` constraint.

use trademap_model::{DataType, Record, SystemModel};

use crate::issue::Issue;

/// Enum fields without a `values` constraint accept anything.
pub fn check(record: &Record, schema: &SystemModel) -> Vec<Issue> {
    schema
        .fields
        .iter()
        .filter(|field| field.data_type == DataType::Enum)
        .filter_map(|field| {
            let value = record.get(&field.name)?;
            if value.is_empty() {
                return None;
            }
            let allowed = field.allowed_values()?;
            let text = value.to_text()?;
            if allowed.contains(&text) {
                return None;
            }
            Some(Issue::EnumValueNotAllowed {
                field: field.name.clone(),
                value: text,
                allowed,
            })
        })
        .collect()
}
