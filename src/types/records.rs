//! Typed rows of the daily and hourly rental datasets.

use crate::types::day_type::DayType;
use crate::types::season::Season;
use crate::types::weather_condition::WeatherCondition;
use chrono::{Datelike, NaiveDate, Weekday};

/// One row of the daily dataset.
///
/// `year`, `month` and `weekday` always agree with `date`, and
/// `total_rentals == casual + registered` holds for every record the loader produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub year: i32,
    pub month: u32,
    pub weekday: Weekday,
    pub working_day: DayType,
    pub weather: WeatherCondition,
    pub holiday: bool,
    /// Normalized temperature.
    pub temperature: f64,
    /// Normalized feeling temperature.
    pub feeling_temperature: f64,
    /// Normalized humidity.
    pub humidity: f64,
    /// Normalized wind speed.
    pub windspeed: f64,
    pub casual: i64,
    pub registered: i64,
    pub total_rentals: i64,
}

/// One row of the hourly dataset: the daily attributes for one `(date, hour)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u32,
    pub season: Season,
    pub year: i32,
    pub month: u32,
    pub weekday: Weekday,
    pub working_day: DayType,
    pub weather: WeatherCondition,
    pub holiday: bool,
    pub temperature: f64,
    pub feeling_temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: i64,
    pub registered: i64,
    pub total_rentals: i64,
}

/// Attributes shared by daily and hourly rows, gathered before the calendar fields are derived.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RentalRow {
    pub date: NaiveDate,
    pub season: Season,
    pub working_day: DayType,
    pub weather: WeatherCondition,
    pub holiday: bool,
    pub temperature: f64,
    pub feeling_temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: i64,
    pub registered: i64,
    pub total_rentals: i64,
}

impl RentalRow {
    pub(crate) fn into_daily(self) -> DailyRecord {
        DailyRecord {
            date: self.date,
            season: self.season,
            year: self.date.year(),
            month: self.date.month(),
            weekday: self.date.weekday(),
            working_day: self.working_day,
            weather: self.weather,
            holiday: self.holiday,
            temperature: self.temperature,
            feeling_temperature: self.feeling_temperature,
            humidity: self.humidity,
            windspeed: self.windspeed,
            casual: self.casual,
            registered: self.registered,
            total_rentals: self.total_rentals,
        }
    }

    pub(crate) fn into_hourly(self, hour: u32) -> HourlyRecord {
        HourlyRecord {
            date: self.date,
            hour,
            season: self.season,
            year: self.date.year(),
            month: self.date.month(),
            weekday: self.date.weekday(),
            working_day: self.working_day,
            weather: self.weather,
            holiday: self.holiday,
            temperature: self.temperature,
            feeling_temperature: self.feeling_temperature,
            humidity: self.humidity,
            windspeed: self.windspeed,
            casual: self.casual,
            registered: self.registered,
            total_rentals: self.total_rentals,
        }
    }
}

impl From<&DailyRecord> for RentalRow {
    fn from(record: &DailyRecord) -> Self {
        RentalRow {
            date: record.date,
            season: record.season,
            working_day: record.working_day,
            weather: record.weather,
            holiday: record.holiday,
            temperature: record.temperature,
            feeling_temperature: record.feeling_temperature,
            humidity: record.humidity,
            windspeed: record.windspeed,
            casual: record.casual,
            registered: record.registered,
            total_rentals: record.total_rentals,
        }
    }
}

impl From<&HourlyRecord> for RentalRow {
    fn from(record: &HourlyRecord) -> Self {
        RentalRow {
            date: record.date,
            season: record.season,
            working_day: record.working_day,
            weather: record.weather,
            holiday: record.holiday,
            temperature: record.temperature,
            feeling_temperature: record.feeling_temperature,
            humidity: record.humidity,
            windspeed: record.windspeed,
            casual: record.casual,
            registered: record.registered,
            total_rentals: record.total_rentals,
        }
    }
}
