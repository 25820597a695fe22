use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use trademap_core::{TransformError, TransformOutcome};

/// Result of one `transform` run over an input file.
#[derive(Debug)]
pub struct TransformRun {
    pub config_id: String,
    pub model_id: String,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub records: Vec<RecordResult>,
}

#[derive(Debug)]
pub struct RecordResult {
    /// Zero-based position in the input file.
    pub index: usize,
    pub result: Result<TransformOutcome, TransformError>,
}

impl TransformRun {
    pub fn succeeded(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.result.is_ok())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn warning_count(&self) -> usize {
        self.outcomes().map(|(_, outcome)| outcome.warnings.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.failed() > 0
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (usize, &TransformOutcome)> {
        self.records
            .iter()
            .filter_map(|record| record.result.as_ref().ok().map(|outcome| (record.index, outcome)))
    }

    /// The output document: one entry per input record, in input order.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.records.iter().map(RecordResult::to_json).collect())
    }
}

impl RecordResult {
    fn to_json(&self) -> JsonValue {
        match &self.result {
            Ok(outcome) => json!({
                "index": self.index,
                "record": outcome.record,
                "warnings": outcome.warnings,
            }),
            Err(error) => json!({
                "error": error.to_string(),
                "index": self.index,
            }),
        }
    }
}

/// One row of the `check` listing.
#[derive(Debug, Clone, Serialize)]
pub struct MappingRow {
    pub source: String,
    pub target: String,
    pub operator: String,
    pub target_type: String,
    pub required: bool,
}
