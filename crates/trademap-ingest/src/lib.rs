#![deny(unsafe_code)]

//! Loading raw trade records and sample headers from bank files.

pub mod csv_table;
pub mod error;
pub mod json_records;

use std::path::Path;

pub use csv_table::{
    CsvTable, read_csv_records, read_csv_table, read_csv_table_from, sample_fields,
    sample_fields_from,
};
pub use error::{IngestError, Result};
pub use json_records::{parse_json_records, read_json_records};

use trademap_model::Record;

/// Input file formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.json` is JSON; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Read records from a CSV or JSON file.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    match InputFormat::from_path(path) {
        InputFormat::Csv => read_csv_records(path),
        InputFormat::Json => read_json_records(path),
    }
}
