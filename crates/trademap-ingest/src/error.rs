use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse csv {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("parse json {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} has no header row", path.display())]
    MissingHeader { path: PathBuf },
    #[error("{} repeats column '{header}'", path.display())]
    DuplicateHeader { path: PathBuf, header: String },
    #[error("{} item {index} is not a JSON object", path.display())]
    NotARecord { path: PathBuf, index: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;
