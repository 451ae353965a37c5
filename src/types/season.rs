//! Defines the `Season` enum.

use crate::types::traits::label::{Label, ParseLabelError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Meteorological season of a rental day.
///
/// Variants are declared in display order, so sorting a list of seasons yields
/// Spring, Summer, Fall, Winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Label for Season {
    const ALL: &'static [Self] = &[Season::Spring, Season::Summer, Season::Fall, Season::Winter];
    const KIND: &'static str = "season";

    fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }
}

/// # Examples
///
/// ```
/// use bikeshare::Season;
///
/// assert_eq!("fall".parse::<Season>(), Ok(Season::Fall));
/// assert_eq!("2".parse::<Season>(), Ok(Season::Summer));
/// assert!("Monsoon".parse::<Season>().is_err());
/// ```
impl FromStr for Season {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
