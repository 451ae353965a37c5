use crate::data::error::{ExtractError, LoadError};
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikeShareError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Polars query failed")]
    PolarsError(#[from] PolarsError),

    #[error("Failed to serialize dashboard snapshot")]
    Json(#[from] serde_json::Error),
}
