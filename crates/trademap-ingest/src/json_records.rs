//! JSON input: a single object or an array of objects.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::debug;

use trademap_model::Record;

use crate::error::{IngestError, Result};

pub fn read_json_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json_records(&text, path)
}

/// Parse JSON text; `origin` names it in errors.
pub fn parse_json_records(text: &str, origin: &Path) -> Result<Vec<Record>> {
    let json_error = |source| IngestError::Json {
        path: origin.to_path_buf(),
        source,
    };
    let items = match serde_json::from_str::<JsonValue>(text).map_err(json_error)? {
        JsonValue::Array(items) => items,
        object @ JsonValue::Object(_) => vec![object],
        _ => {
            return Err(IngestError::NotARecord {
                path: origin.to_path_buf(),
                index: 0,
            });
        }
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(IngestError::NotARecord {
                path: origin.to_path_buf(),
                index,
            });
        }
        records.push(serde_json::from_value::<Record>(item).map_err(json_error)?);
    }
    debug!(path = %origin.display(), records = records.len(), "json records read");
    Ok(records)
}
