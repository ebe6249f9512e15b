use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for dataset loading, record validation, and output failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("dataset '{dataset}' is unavailable: {reason}")]
    DataSource { dataset: String, reason: String },
    #[error("record {row} is missing the '{field}' field")]
    MissingField { field: &'static str, row: usize },
    #[error("record {row} has an unexpected shape: {detail}")]
    RecordShape { row: usize, detail: String },
    #[error("failed writing {path:?}: {source}")]
    OutputWrite { path: PathBuf, source: io::Error },
}
