//! Mapping executor.

use tracing::debug;

use trademap_model::{MappingConfig, Record};
use trademap_transform::apply;

use crate::report::ExecutionReport;

/// Build the output record for `config` from `record`.
///
/// Mappings run in config order. A mapping whose source field is absent from `record` is
/// skipped. When several mappings write the same target field, the last one wins. The
/// output is not checked against any schema.
pub fn execute(record: &Record, config: &MappingConfig) -> Record {
    execute_with_report(record, config).into_record()
}

/// [`execute`], also reporting skipped sources and overwritten targets.
pub fn execute_with_report(record: &Record, config: &MappingConfig) -> ExecutionReport {
    let mut report = ExecutionReport::default();
    for mapping in &config.mappings {
        let Some(value) = record.get(&mapping.source_field) else {
            debug!(
                config = %config.id,
                source = %mapping.source_field,
                target = %mapping.target_field,
                "source field absent, mapping skipped"
            );
            report.skipped_sources.push(mapping.source_field.clone());
            continue;
        };
        let mapped = match &mapping.transformation {
            Some(rule) => apply(value, rule, record),
            None => value.clone(),
        };
        if report
            .record
            .insert(mapping.target_field.clone(), mapped)
            .is_some()
            && !report.overwritten_targets.contains(&mapping.target_field)
        {
            debug!(
                config = %config.id,
                target = %mapping.target_field,
                "target field overwritten by a later mapping"
            );
            report.overwritten_targets.push(mapping.target_field.clone());
        }
    }
    report
}
