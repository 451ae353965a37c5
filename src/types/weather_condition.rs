//! Defines the `WeatherCondition` enum, mapping the dataset's weather situation labels
//! and numeric codes to descriptive variants.

use crate::types::traits::label::{Label, ParseLabelError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Represents the weather situation reported for a rental day or hour.
///
/// The source data uses four ordered categories, from the most pleasant to the
/// most severe. The numeric codes `1..=4` of the raw UCI dataset are accepted as well
/// as the dashboard labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WeatherCondition {
    /// Code 1: clear, few clouds, partly cloudy.
    #[serde(rename = "Clear/Cloudy")]
    ClearCloudy,
    /// Code 2: mist combined with clouds.
    #[serde(rename = "Mist/Cloudy")]
    MistCloudy,
    /// Code 3: light snow or light rain, possibly with thunderstorm.
    #[serde(rename = "Light Snow/Rain")]
    LightSnowRain,
    /// Code 4: heavy rain, ice pallets, snow or fog.
    #[serde(rename = "Heavy Rain/Fog")]
    HeavyRainFog,
}

impl Label for WeatherCondition {
    const ALL: &'static [Self] = &[
        WeatherCondition::ClearCloudy,
        WeatherCondition::MistCloudy,
        WeatherCondition::LightSnowRain,
        WeatherCondition::HeavyRainFog,
    ];
    const KIND: &'static str = "weather condition";

    fn label(&self) -> &'static str {
        match self {
            WeatherCondition::ClearCloudy => "Clear/Cloudy",
            WeatherCondition::MistCloudy => "Mist/Cloudy",
            WeatherCondition::LightSnowRain => "Light Snow/Rain",
            WeatherCondition::HeavyRainFog => "Heavy Rain/Fog",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(WeatherCondition::ClearCloudy),
            2 => Some(WeatherCondition::MistCloudy),
            3 => Some(WeatherCondition::LightSnowRain),
            4 => Some(WeatherCondition::HeavyRainFog),
            _ => None,
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
