//! CSV bank files: header sampling and row loading.
//!
//! The first non-blank row is the header. Header names are trimmed, stripped of a byte
//! order mark and have inner whitespace collapsed. Cells are trimmed; blank cells and
//! cells missing from short rows load as `Null`.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use trademap_model::{DataType, FieldDefinition, Record, Value};

use crate::error::{IngestError, Result};

/// Rows of a CSV file with normalized headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// One record per row, keyed by header.
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .filter(|(_, header)| !header.is_empty())
                    .map(|(idx, header)| {
                        let value = match row.get(idx).map(String::as_str) {
                            None | Some("") => Value::Null,
                            Some(cell) => Value::from(cell),
                        };
                        (header.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_table_from(file, path)
}

/// Read a CSV table from any reader; `origin` names it in errors.
pub fn read_csv_table_from<R: Read>(reader: R, origin: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        match headers {
            None => headers = Some(check_headers(&record, origin)?),
            Some(_) => rows.push(row),
        }
    }
    let headers = headers.ok_or_else(|| IngestError::MissingHeader {
        path: origin.to_path_buf(),
    })?;
    debug!(
        path = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv table read"
    );
    Ok(CsvTable { headers, rows })
}

fn check_headers(record: &csv::StringRecord, origin: &Path) -> Result<Vec<String>> {
    let headers: Vec<String> = record.iter().map(normalize_header).collect();
    let mut seen = BTreeSet::new();
    for header in &headers {
        if header.is_empty() {
            warn!(path = %origin.display(), "blank column header ignored");
            continue;
        }
        if !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateHeader {
                path: origin.to_path_buf(),
                header: header.clone(),
            });
        }
    }
    Ok(headers)
}

/// Source field definitions from a sample file's header: optional `string` fields.
pub fn sample_fields(path: &Path) -> Result<Vec<FieldDefinition>> {
    Ok(fields_from_headers(&read_csv_table(path)?.headers))
}

pub fn sample_fields_from<R: Read>(reader: R, origin: &Path) -> Result<Vec<FieldDefinition>> {
    Ok(fields_from_headers(&read_csv_table_from(reader, origin)?.headers))
}

fn fields_from_headers(headers: &[String]) -> Vec<FieldDefinition> {
    headers
        .iter()
        .filter(|header| !header.is_empty())
        .map(|header| FieldDefinition::new(header.clone(), DataType::String))
        .collect()
}

pub fn read_csv_records(path: &Path) -> Result<Vec<Record>> {
    Ok(read_csv_table(path)?.records())
}
