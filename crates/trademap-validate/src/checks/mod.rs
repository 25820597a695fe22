//! Validation check modules.
//!
//! Each module performs one kind of check against the schema.

mod datatype;
mod enums;
mod required;

use tracing::warn;

use trademap_model::{Record, SystemModel};

use crate::error::{Result, ValidationError};
use crate::issue::Issue;
use crate::options::ValidationOptions;
use crate::report::ValidationReport;

/// Run all checks on a record.
pub fn run_all(
    record: &Record,
    schema: &SystemModel,
    options: &ValidationOptions,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(&schema.id);

    // 1. Required fields (presence is fatal, null is reported)
    for issue in required::check(record, schema)? {
        report.add(issue);
    }

    // 2. Declared type conformance
    for issue in datatype::check(record, schema) {
        if options.is_strict()
            && let Issue::TypeMismatch {
                field,
                expected,
                found,
            } = issue
        {
            return Err(ValidationError::TypeMismatch {
                model_id: schema.id.clone(),
                field,
                expected,
                found,
            });
        }
        report.add(issue);
    }

    // 3. Enum membership
    if options.check_enum_membership {
        for issue in enums::check(record, schema) {
            report.add(issue);
        }
    }

    for issue in &report.issues {
        warn!(model = %schema.id, field = issue.field(), code = issue.code(), "{}", issue.message());
    }
    Ok(report)
}
