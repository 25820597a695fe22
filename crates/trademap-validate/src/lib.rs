#![deny(unsafe_code)]

//! Schema conformance for mapped records.
//!
//! [`validate`] checks a record against a [`SystemModel`]: missing required fields are
//! fatal, everything else is reported as an [`Issue`] unless strict mode asks for type
//! mismatches to fail.

mod checks;
pub mod error;
pub mod issue;
pub mod options;
pub mod report;

pub use error::{Result, ValidationError};
pub use issue::{Issue, Severity};
pub use options::{ValidationMode, ValidationOptions};
pub use report::ValidationReport;

use trademap_model::{Record, SystemModel};

/// Validate one record against `schema`.
///
/// Fields in the record that the schema does not declare are ignored.
pub fn validate(
    record: &Record,
    schema: &SystemModel,
    options: &ValidationOptions,
) -> Result<ValidationReport> {
    checks::run_all(record, schema, options)
}
