//! The `Label` trait shared by every closed categorical type of the dataset.

use thiserror::Error;

/// Returned when a source value matches none of the labels (or codes) of a categorical type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// A closed enumeration stored as a text label in the rental frames.
///
/// The derived `Ord` of an implementor is its display order. Filtering never relies on it,
/// only on label equality.
pub trait Label: Copy + Ord + Sized + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Human readable name of the category, used in error messages.
    const KIND: &'static str;

    /// The canonical label written to the frame and shown on the dashboard.
    fn label(&self) -> &'static str;

    /// Maps the numeric encoding used by the raw UCI dataset.
    fn from_code(code: i64) -> Option<Self>;

    /// Parses a numeric code or, failing that, a label compared case-insensitively.
    fn parse_label(value: &str) -> Result<Self, ParseLabelError> {
        let trimmed = value.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            if let Some(parsed) = Self::from_code(code) {
                return Ok(parsed);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLabelError {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}
