//! Mapping followed by validation.

use serde::Serialize;
use tracing::{debug, info_span, warn};

use trademap_map::execute_with_report;
use trademap_model::{MappingConfig, Record, SystemModel};
use trademap_validate::{Issue, validate};

use crate::error::Result;
use crate::options::TransformOptions;

/// A validated output record and the soft findings raised on the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransformOutcome {
    pub record: Record,
    pub warnings: Vec<Issue>,
    /// Source fields the config names but the input lacked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_sources: Vec<String>,
}

impl TransformOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Map `record` through `config`, then validate against `model`.
///
/// Pure: the same inputs always give the same outcome. Fails when a required field is
/// missing from the mapped record, or on a type mismatch in strict mode.
pub fn transform(
    record: &Record,
    config: &MappingConfig,
    model: &SystemModel,
    options: &TransformOptions,
) -> Result<TransformOutcome> {
    let span = info_span!("transform", config = %config.id, model = %model.id);
    let _guard = span.enter();

    if config.system_model_id != model.id {
        warn!(
            expected = %config.system_model_id,
            "mapping config applied to a different system model"
        );
    }

    let execution = execute_with_report(record, config);
    debug!(
        input_fields = record.len(),
        output_fields = execution.record.len(),
        skipped = execution.skipped_sources.len(),
        "mapping executed"
    );
    let report = validate(&execution.record, model, &options.validation)?;

    Ok(TransformOutcome {
        record: execution.record,
        warnings: report.into_issues(),
        skipped_sources: execution.skipped_sources,
    })
}

/// [`transform`] over many records. Each record fails or succeeds on its own.
pub fn transform_batch<'a, I>(
    records: I,
    config: &MappingConfig,
    model: &SystemModel,
    options: &TransformOptions,
) -> Vec<Result<TransformOutcome>>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|record| transform(record, config, model, options))
        .collect()
}
