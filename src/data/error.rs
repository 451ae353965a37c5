use crate::data::source::Granularity;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Problems turning a raw or canonical frame into typed rental rows.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Required column '{0}' not found")]
    MissingColumn(String),

    #[error("Failed to cast column '{column}'")]
    Cast {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Row {row}: total_rentals ({total}) != casual ({casual}) + registered ({registered})")]
    CountMismatch {
        row: usize,
        casual: i64,
        registered: i64,
        total: i64,
    },

    #[error("Failed to build rental frame")]
    FrameBuild(#[source] PolarsError),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read data file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Data download or decompression failed")]
    DownloadIo(#[from] std::io::Error),

    #[error("{source_name} exceeds the download limit of {limit} bytes")]
    SizeLimitExceeded { source_name: String, limit: u64 },

    #[error("Parsing error processing CSV data for the {granularity} dataset")]
    CsvRead {
        granularity: Granularity,
        #[source]
        source: PolarsError,
    },

    #[error("The {granularity} dataset is malformed")]
    Malformed {
        granularity: Granularity,
        #[source]
        source: ExtractError,
    },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
