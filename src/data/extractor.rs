//! Conversion between polars frames and typed rental rows.
//!
//! The same extraction path reads the raw CSV frame (labels or numeric codes, dates as text)
//! and the canonical frames built by [`rows_to_frame`], so both are validated identically.

use crate::data::error::ExtractError;
use crate::types::day_type::DayType;
use crate::types::frames::columns::{
    CASUAL, DATE, FEELING_TEMPERATURE, HOLIDAY, HOUR, HUMIDITY, MONTH, REGISTERED, SEASON,
    TEMPERATURE, TOTAL_RENTALS, WEATHER, WEEKDAY, WINDSPEED, WORKING_DAY, YEAR,
};
use crate::types::calendar::weekday_label;
use crate::types::records::RentalRow;
use crate::types::season::Season;
use crate::types::traits::label::Label;
use crate::types::weather_condition::WeatherCondition;
use crate::utils::{days_since_epoch, parse_leading_date};
use chrono::Datelike;
use polars::prelude::*;

fn frame_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ExtractError> {
    df.column(name)
        .map_err(|_| ExtractError::MissingColumn(name.to_string()))
}

fn cast_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Column, ExtractError> {
    frame_column(df, name)?
        .cast(dtype)
        .map_err(|source| ExtractError::Cast {
            column: name.to_string(),
            source,
        })
}

fn invalid_value(df: &DataFrame, name: &str, row: usize) -> ExtractError {
    let value = df
        .column(name)
        .ok()
        .and_then(|column| column.get(row).ok())
        .map(|value| value.to_string())
        .unwrap_or_else(|| "null".to_string());
    ExtractError::InvalidValue {
        column: name.to_string(),
        row,
        value,
    }
}

fn parse_text_column<T>(
    df: &DataFrame,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, ExtractError> {
    let column = cast_column(df, name, &DataType::String)?;
    let values = column.str().map_err(|source| ExtractError::Cast {
        column: name.to_string(),
        source,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.and_then(&parse).ok_or_else(|| invalid_value(df, name, row)))
        .collect()
}

fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, ExtractError> {
    let column = cast_column(df, name, &DataType::Float64)?;
    let values = column.f64().map_err(|source| ExtractError::Cast {
        column: name.to_string(),
        source,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid_value(df, name, row))
        })
        .collect()
}

fn count_values(df: &DataFrame, name: &str) -> Result<Vec<i64>, ExtractError> {
    let column = cast_column(df, name, &DataType::Int64)?;
    let values = column.i64().map_err(|source| ExtractError::Cast {
        column: name.to_string(),
        source,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .filter(|v| *v >= 0)
                .ok_or_else(|| invalid_value(df, name, row))
        })
        .collect()
}

/// Lenient holiday flag: `1`, `true`, `yes` and `holiday` are set, any other text is not.
fn parse_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    Some(matches!(
        normalized.as_str(),
        "1" | "true" | "yes" | "holiday"
    ))
}

/// Reads every shared rental attribute and checks the count invariant.
///
/// `year`, `month` and `weekday` must be present but are not read: they are derived from
/// `date` when the rows become records.
pub(crate) fn extract_rows(df: &DataFrame) -> Result<Vec<RentalRow>, ExtractError> {
    for name in [YEAR, MONTH, WEEKDAY] {
        frame_column(df, name)?;
    }

    let dates = parse_text_column(df, DATE, parse_leading_date)?;
    let seasons = parse_text_column(df, SEASON, |v| Season::parse_label(v).ok())?;
    let working_days = parse_text_column(df, WORKING_DAY, |v| DayType::parse_label(v).ok())?;
    let weather = parse_text_column(df, WEATHER, |v| WeatherCondition::parse_label(v).ok())?;
    let holidays = parse_text_column(df, HOLIDAY, parse_flag)?;
    let temperature = f64_values(df, TEMPERATURE)?;
    let feeling_temperature = f64_values(df, FEELING_TEMPERATURE)?;
    let humidity = f64_values(df, HUMIDITY)?;
    let windspeed = f64_values(df, WINDSPEED)?;
    let casual = count_values(df, CASUAL)?;
    let registered = count_values(df, REGISTERED)?;
    let total_rentals = count_values(df, TOTAL_RENTALS)?;

    (0..df.height())
        .map(|row| {
            if casual[row].checked_add(registered[row]) != Some(total_rentals[row]) {
                return Err(ExtractError::CountMismatch {
                    row,
                    casual: casual[row],
                    registered: registered[row],
                    total: total_rentals[row],
                });
            }
            Ok(RentalRow {
                date: dates[row],
                season: seasons[row],
                working_day: working_days[row],
                weather: weather[row],
                holiday: holidays[row],
                temperature: temperature[row],
                feeling_temperature: feeling_temperature[row],
                humidity: humidity[row],
                windspeed: windspeed[row],
                casual: casual[row],
                registered: registered[row],
                total_rentals: total_rentals[row],
            })
        })
        .collect()
}

/// Reads the `hour` column, which must hold integers in `0..=23`.
pub(crate) fn extract_hours(df: &DataFrame) -> Result<Vec<u32>, ExtractError> {
    let hours = count_values(df, HOUR)?;
    hours
        .into_iter()
        .enumerate()
        .map(|(row, hour)| {
            if (0..24).contains(&hour) {
                Ok(hour as u32)
            } else {
                Err(invalid_value(df, HOUR, row))
            }
        })
        .collect()
}

/// Builds a canonical rental frame. `hours`, when given, must have one entry per row.
pub(crate) fn rows_to_frame(
    rows: &[RentalRow],
    hours: Option<&[u32]>,
) -> Result<DataFrame, ExtractError> {
    let days: Vec<i32> = rows.iter().map(|r| days_since_epoch(r.date)).collect();
    let years: Vec<i64> = rows.iter().map(|r| r.date.year() as i64).collect();
    let months: Vec<i64> = rows.iter().map(|r| r.date.month() as i64).collect();
    let weekdays: Vec<&str> = rows.iter().map(|r| weekday_label(r.date.weekday())).collect();
    let seasons: Vec<&str> = rows.iter().map(|r| r.season.label()).collect();
    let working_days: Vec<bool> = rows.iter().map(|r| r.working_day.is_working_day()).collect();
    let weather: Vec<&str> = rows.iter().map(|r| r.weather.label()).collect();
    let holidays: Vec<bool> = rows.iter().map(|r| r.holiday).collect();

    let date_column = Column::new(DATE.into(), days)
        .cast(&DataType::Date)
        .map_err(ExtractError::FrameBuild)?;

    let mut columns = vec![date_column];
    if let Some(hours) = hours {
        let hours: Vec<i64> = hours.iter().map(|h| *h as i64).collect();
        columns.push(Column::new(HOUR.into(), hours));
    }
    columns.extend([
        Column::new(SEASON.into(), seasons),
        Column::new(YEAR.into(), years),
        Column::new(MONTH.into(), months),
        Column::new(WEEKDAY.into(), weekdays),
        Column::new(WORKING_DAY.into(), working_days),
        Column::new(WEATHER.into(), weather),
        Column::new(HOLIDAY.into(), holidays),
        Column::new(
            TEMPERATURE.into(),
            rows.iter().map(|r| r.temperature).collect::<Vec<f64>>(),
        ),
        Column::new(
            FEELING_TEMPERATURE.into(),
            rows.iter().map(|r| r.feeling_temperature).collect::<Vec<f64>>(),
        ),
        Column::new(
            HUMIDITY.into(),
            rows.iter().map(|r| r.humidity).collect::<Vec<f64>>(),
        ),
        Column::new(
            WINDSPEED.into(),
            rows.iter().map(|r| r.windspeed).collect::<Vec<f64>>(),
        ),
        Column::new(
            CASUAL.into(),
            rows.iter().map(|r| r.casual).collect::<Vec<i64>>(),
        ),
        Column::new(
            REGISTERED.into(),
            rows.iter().map(|r| r.registered).collect::<Vec<i64>>(),
        ),
        Column::new(
            TOTAL_RENTALS.into(),
            rows.iter().map(|r| r.total_rentals).collect::<Vec<i64>>(),
        ),
    ]);

    DataFrame::new(columns).map_err(ExtractError::FrameBuild)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn read_csv(text: &str) -> DataFrame {
        CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
            .finish()
            .unwrap()
    }

    const HEADER: &str = "date,season,year,month,weekday,workingday,weather_condition,holiday,temperature,feeling_temperature,humidity,windspeed,casual,registered,total_rentals";

    #[test]
    fn test_extract_rows_from_labels() -> Result<(), Box<dyn std::error::Error>> {
        let df = read_csv(&format!(
            "{HEADER}\n\
             2011-01-01,Spring,2011,Jan,Saturday,Non-Working Day,Mist/Cloudy,Not Holiday,0.344,0.364,0.806,0.160,331,654,985\n\
             2011-01-03,Spring,2011,Jan,Monday,Working Day,Clear/Cloudy,Not Holiday,0.196,0.189,0.437,0.248,120,1229,1349\n"
        ));
        let rows = extract_rows(&df)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(rows[0].working_day, DayType::NonWorkingDay);
        assert_eq!(rows[0].weather, WeatherCondition::MistCloudy);
        assert!(!rows[0].holiday);
        assert_eq!(rows[1].total_rentals, 1349);
        Ok(())
    }

    #[test]
    fn test_extract_rows_from_numeric_codes() -> Result<(), Box<dyn std::error::Error>> {
        let df = read_csv(&format!(
            "{HEADER}\n2011-07-04,3,0,7,1,0,1,1,0.7,0.6,0.5,0.1,3065,2978,6043\n"
        ));
        let rows = extract_rows(&df)?;
        assert_eq!(rows[0].season, Season::Fall);
        assert_eq!(rows[0].working_day, DayType::NonWorkingDay);
        assert_eq!(rows[0].weather, WeatherCondition::ClearCloudy);
        assert!(rows[0].holiday);
        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() {
        let df = read_csv("date,season\n2011-01-01,Spring\n");
        let err = extract_rows(&df).unwrap_err();
        assert!(matches!(err, ExtractError::MissingColumn(ref name) if name == "year"));
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let df = read_csv(&format!(
            "{HEADER}\n2011-01-01,Spring,2011,1,6,0,2,0,0.3,0.3,0.8,0.1,331,654,900\n"
        ));
        let err = extract_rows(&df).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::CountMismatch { row: 0, total: 900, .. }
        ));
    }

    #[test]
    fn test_unknown_season_is_rejected() {
        let df = read_csv(&format!(
            "{HEADER}\n2011-01-01,Monsoon,2011,1,6,0,2,0,0.3,0.3,0.8,0.1,331,654,985\n"
        ));
        let err = extract_rows(&df).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidValue { ref column, row: 0, .. } if column == "season"
        ));
    }

    #[test]
    fn test_hour_out_of_range_is_rejected() {
        let df = read_csv("hour\n0\n23\n24\n");
        let err = extract_hours(&df).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidValue { row: 2, .. }));
    }

    #[test]
    fn test_canonical_frame_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let df = read_csv(&format!(
            "{HEADER}\n2012-02-29,1,1,2,3,1,3,0,0.25,0.22,0.9,0.3,12,88,100\n"
        ));
        let rows = extract_rows(&df)?;
        let canonical = rows_to_frame(&rows, Some(&[17]))?;
        assert_eq!(canonical.column(DATE)?.dtype(), &DataType::Date);
        assert_eq!(canonical.column(SEASON)?.str()?.get(0), Some("Spring"));
        assert_eq!(canonical.column(WEEKDAY)?.str()?.get(0), Some("Wednesday"));
        assert_eq!(canonical.column(MONTH)?.i64()?.get(0), Some(2));
        assert_eq!(extract_hours(&canonical)?, vec![17]);
        assert_eq!(extract_rows(&canonical)?, rows);
        Ok(())
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Holiday"), Some(true));
        assert_eq!(parse_flag("Not Holiday"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(" "), None);
    }
}
