//! Required field presence.

use tracing::warn;

use trademap_model::{Record, SystemModel};

use crate::error::{Result, ValidationError};
use crate::issue::Issue;

/// Fails on the first required field absent from the record, in schema order.
///
/// Any further absent required fields are logged, not returned. A required field present
/// with a null value is an issue, not a failure.
pub fn check(record: &Record, schema: &SystemModel) -> Result<Vec<Issue>> {
    let mut missing = schema
        .required_fields()
        .filter(|field| !record.contains(&field.name));
    if let Some(first) = missing.next() {
        for other in missing {
            warn!(model = %schema.id, field = %other.name, "required field also missing");
        }
        return Err(ValidationError::RequiredFieldMissing {
            model_id: schema.id.clone(),
            field: first.name.clone(),
        });
    }

    Ok(schema
        .required_fields()
        .filter(|field| record.get(&field.name).is_some_and(|value| value.is_null()))
        .map(|field| Issue::RequiredFieldNull {
            field: field.name.clone(),
        })
        .collect())
}
