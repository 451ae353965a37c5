//! Defines the `DayType` enum, the dashboard's working-day flag.

use crate::types::traits::label::{Label, ParseLabelError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Whether a day is a working day (neither weekend nor holiday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayType {
    #[serde(rename = "Working Day")]
    WorkingDay,
    #[serde(rename = "Non-Working Day")]
    NonWorkingDay,
}

impl DayType {
    pub fn is_working_day(&self) -> bool {
        matches!(self, DayType::WorkingDay)
    }
}

impl From<bool> for DayType {
    fn from(working: bool) -> Self {
        if working {
            DayType::WorkingDay
        } else {
            DayType::NonWorkingDay
        }
    }
}

impl Label for DayType {
    const ALL: &'static [Self] = &[DayType::WorkingDay, DayType::NonWorkingDay];
    const KIND: &'static str = "working day flag";

    fn label(&self) -> &'static str {
        match self {
            DayType::WorkingDay => "Working Day",
            DayType::NonWorkingDay => "Non-Working Day",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DayType::WorkingDay),
            0 => Some(DayType::NonWorkingDay),
            _ => None,
        }
    }

    fn parse_label(value: &str) -> Result<Self, ParseLabelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(DayType::WorkingDay),
            "false" => Ok(DayType::NonWorkingDay),
            _ => {
                let trimmed = value.trim();
                if let Some(parsed) = trimmed.parse::<i64>().ok().and_then(Self::from_code) {
                    return Ok(parsed);
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
    }
}

impl FromStr for DayType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
