//! What happened while executing a mapping config.

use serde::Serialize;

use trademap_model::Record;

/// Output record plus the mappings that did not contribute cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionReport {
    /// Record keyed by target field names.
    pub record: Record,
    /// Source fields named by a mapping but absent from the input, in mapping order.
    pub skipped_sources: Vec<String>,
    /// Target fields written more than once; the last mapping won.
    pub overwritten_targets: Vec<String>,
}

impl ExecutionReport {
    /// True when every mapping found its source and wrote a distinct target.
    pub fn is_clean(&self) -> bool {
        self.skipped_sources.is_empty() && self.overwritten_targets.is_empty()
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}
