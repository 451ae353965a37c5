//! Descriptive views derived from a filtered subset.
//!
//! Every derivation is a pure function of its input frame. Output rows are sorted by the
//! display order of their keys, and an empty input always yields an empty output.

pub mod correlation;
pub mod grouped;
pub mod monthly;
pub mod snapshot;
pub mod weekday;

use crate::data::error::ExtractError;
use crate::error::BikeShareError;
use crate::types::traits::label::Label;
use polars::prelude::{DataFrame, DataType};

fn missing(name: &str, row: usize) -> BikeShareError {
    ExtractError::InvalidValue {
        column: name.to_string(),
        row,
        value: "null".to_string(),
    }
    .into()
}

/// Reads a canonical label column of an aggregated frame.
pub(crate) fn label_values<T: Label>(df: &DataFrame, name: &str) -> Result<Vec<T>, BikeShareError> {
    df.column(name)?
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .and_then(|v| T::parse_label(v).ok())
                .ok_or_else(|| missing(name, row))
        })
        .collect()
}

pub(crate) fn int_values(df: &DataFrame, name: &str) -> Result<Vec<i64>, BikeShareError> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    column
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| missing(name, row)))
        .collect()
}

/// Reads a list column, as produced by aggregating a bare column in a group-by.
pub(crate) fn int_list_values(
    df: &DataFrame,
    name: &str,
) -> Result<Vec<Vec<i64>>, BikeShareError> {
    df.column(name)?
        .list()?
        .into_iter()
        .enumerate()
        .map(|(row, values)| -> Result<Vec<i64>, BikeShareError> {
            let values = values.ok_or_else(|| missing(name, row))?;
            let values = values.cast(&DataType::Int64)?;
            let counts = values
                .i64()?
                .into_iter()
                .map(|value| value.ok_or_else(|| missing(name, row)))
                .collect::<Result<Vec<i64>, BikeShareError>>()?;
            Ok(counts)
        })
        .collect()
}

pub(crate) fn float_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, BikeShareError> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    column
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| missing(name, row)))
        .collect()
}

pub(crate) fn flag_values(df: &DataFrame, name: &str) -> Result<Vec<bool>, BikeShareError> {
    df.column(name)?
        .bool()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| missing(name, row)))
        .collect()
}
