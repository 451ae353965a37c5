//! Group-by derivations computed with polars: the season, weather and hourly views plus the
//! headline metrics.

use crate::aggregate::{flag_values, float_values, int_values, label_values};
use crate::error::BikeShareError;
use crate::types::day_type::DayType;
use crate::types::frames::columns::{
    CASUAL, HOUR, REGISTERED, SEASON, TOTAL_RENTALS, WEATHER, WORKING_DAY, YEAR,
};
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;
use crate::types::frames::RentalFrame;
use crate::types::season::Season;
use crate::types::traits::label::Label;
use crate::types::usage::UserType;
use crate::types::weather_condition::WeatherCondition;
use polars::prelude::{col, DataFrame, Expr, LazyFrame};
use serde::Serialize;

const MEAN_RENTALS: &str = "mean_rentals";

/// Sum of `total_rentals` for one season of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonYearTotal {
    pub season: Season,
    pub year: i32,
    pub total_rentals: i64,
}

/// Sum of `total_rentals` for one weather condition of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherYearTotal {
    pub weather: WeatherCondition,
    pub year: i32,
    pub total_rentals: i64,
}

/// Mean hourly rentals for one day type at one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyProfilePoint {
    pub day_type: DayType,
    pub hour: u32,
    pub mean_rentals: f64,
}

/// [`HourlyProfilePoint`] split further by season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalHourlyPoint {
    pub season: Season,
    pub day_type: DayType,
    pub hour: u32,
    pub mean_rentals: f64,
}

/// Rentals of one rider population in one season (long form: one row per season and user type).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonUserTypeTotal {
    pub season: Season,
    pub user_type: UserType,
    pub rentals: i64,
}

/// The metric cards: rental sums over the filtered daily subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub days: usize,
    pub total_rentals: i64,
    pub casual: i64,
    pub registered: i64,
}

fn grouped(lazy: LazyFrame, keys: &[&str], aggs: Vec<Expr>) -> Result<DataFrame, BikeShareError> {
    let keys: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    Ok(lazy.group_by_stable(keys).agg(aggs).collect()?)
}

fn label_year_totals<T: Label>(
    daily: &DailyFrame,
    column: &str,
) -> Result<Vec<(T, i32, i64)>, BikeShareError> {
    let df = grouped(
        daily.lazy(),
        &[column, YEAR],
        vec![col(TOTAL_RENTALS).sum()],
    )?;
    let mut rows: Vec<(T, i32, i64)> = label_values::<T>(&df, column)?
        .into_iter()
        .zip(int_values(&df, YEAR)?)
        .zip(int_values(&df, TOTAL_RENTALS)?)
        .map(|((label, year), total)| (label, year as i32, total))
        .collect();
    rows.sort_by_key(|(label, year, _)| (*label, *year));
    Ok(rows)
}

/// Total rentals by season and year, seasons in display order then years ascending.
pub fn season_year_totals(daily: &DailyFrame) -> Result<Vec<SeasonYearTotal>, BikeShareError> {
    Ok(label_year_totals::<Season>(daily, SEASON)?
        .into_iter()
        .map(|(season, year, total_rentals)| SeasonYearTotal {
            season,
            year,
            total_rentals,
        })
        .collect())
}

/// Total rentals by weather condition and year. Only conditions present in the subset appear.
pub fn weather_year_totals(daily: &DailyFrame) -> Result<Vec<WeatherYearTotal>, BikeShareError> {
    Ok(label_year_totals::<WeatherCondition>(daily, WEATHER)?
        .into_iter()
        .map(|(weather, year, total_rentals)| WeatherYearTotal {
            weather,
            year,
            total_rentals,
        })
        .collect())
}

/// Mean rentals per hour of day, split by working and non-working days.
pub fn hourly_profile(hourly: &HourlyFrame) -> Result<Vec<HourlyProfilePoint>, BikeShareError> {
    let df = grouped(
        hourly.lazy(),
        &[WORKING_DAY, HOUR],
        vec![col(TOTAL_RENTALS).mean().alias(MEAN_RENTALS)],
    )?;
    let mut points: Vec<HourlyProfilePoint> = flag_values(&df, WORKING_DAY)?
        .into_iter()
        .zip(int_values(&df, HOUR)?)
        .zip(float_values(&df, MEAN_RENTALS)?)
        .map(|((working, hour), mean_rentals)| HourlyProfilePoint {
            day_type: DayType::from(working),
            hour: hour as u32,
            mean_rentals,
        })
        .collect();
    points.sort_by_key(|p| (p.day_type, p.hour));
    Ok(points)
}

/// Mean rentals per season, day type and hour of day.
pub fn seasonal_hourly_profile(
    hourly: &HourlyFrame,
) -> Result<Vec<SeasonalHourlyPoint>, BikeShareError> {
    let df = grouped(
        hourly.lazy(),
        &[SEASON, WORKING_DAY, HOUR],
        vec![col(TOTAL_RENTALS).mean().alias(MEAN_RENTALS)],
    )?;
    let mut points: Vec<SeasonalHourlyPoint> = label_values::<Season>(&df, SEASON)?
        .into_iter()
        .zip(flag_values(&df, WORKING_DAY)?)
        .zip(int_values(&df, HOUR)?)
        .zip(float_values(&df, MEAN_RENTALS)?)
        .map(|(((season, working), hour), mean_rentals)| SeasonalHourlyPoint {
            season,
            day_type: DayType::from(working),
            hour: hour as u32,
            mean_rentals,
        })
        .collect();
    points.sort_by_key(|p| (p.season, p.day_type, p.hour));
    Ok(points)
}

/// Casual and registered sums per season, reshaped to one row per season and user type.
pub fn season_user_type_totals(
    daily: &DailyFrame,
) -> Result<Vec<SeasonUserTypeTotal>, BikeShareError> {
    let df = grouped(
        daily.lazy(),
        &[SEASON],
        vec![col(CASUAL).sum(), col(REGISTERED).sum()],
    )?;
    let casual = int_values(&df, CASUAL)?;
    let registered = int_values(&df, REGISTERED)?;

    let mut rows: Vec<SeasonUserTypeTotal> = label_values::<Season>(&df, SEASON)?
        .into_iter()
        .enumerate()
        .flat_map(|(row, season)| {
            UserType::ALL.into_iter().map(move |user_type| (row, season, user_type))
        })
        .map(|(row, season, user_type)| SeasonUserTypeTotal {
            season,
            user_type,
            rentals: match user_type {
                UserType::Casual => casual[row],
                UserType::Registered => registered[row],
            },
        })
        .collect();
    rows.sort_by_key(|r| (r.season, r.user_type));
    Ok(rows)
}

/// Rental sums over the subset, or `None` when it has no rows.
pub fn headline(daily: &DailyFrame) -> Result<Option<Headline>, BikeShareError> {
    if daily.is_empty() {
        return Ok(None);
    }
    let df = daily
        .lazy()
        .select([
            col(TOTAL_RENTALS).sum(),
            col(CASUAL).sum(),
            col(REGISTERED).sum(),
        ])
        .collect()?;
    let sum = |name: &str| -> Result<i64, BikeShareError> {
        Ok(int_values(&df, name)?.first().copied().unwrap_or_default())
    };
    Ok(Some(Headline {
        days: daily.len(),
        total_rentals: sum(TOTAL_RENTALS)?,
        casual: sum(CASUAL)?,
        registered: sum(REGISTERED)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{daily_fixture, date, hourly_fixture};
    use crate::types::filter_criteria::FilterCriteria;
    use DayType::{NonWorkingDay, WorkingDay};

    fn nothing() -> FilterCriteria {
        FilterCriteria::builder()
            .start_date(date(2030, 1, 1))
            .end_date(date(2030, 12, 31))
            .build()
    }

    #[test]
    fn test_season_year_totals() -> Result<(), BikeShareError> {
        let totals = season_year_totals(&daily_fixture())?;
        let keys: Vec<(Season, i32, i64)> = totals
            .iter()
            .map(|t| (t.season, t.year, t.total_rentals))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Season::Spring, 2011, 4697),
                (Season::Summer, 2012, 11500),
                (Season::Fall, 2011, 10708),
                (Season::Winter, 2011, 450),
                (Season::Winter, 2012, 22),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_season_totals_add_up_to_filtered_sum() -> Result<(), BikeShareError> {
        let daily = daily_fixture();
        let criteria = FilterCriteria::builder()
            .start_date(date(2011, 1, 2))
            .end_date(date(2012, 4, 15))
            .weather(vec![WeatherCondition::ClearCloudy, WeatherCondition::MistCloudy])
            .build();
        let filtered = daily.filter(&criteria)?;

        let grouped_sum: i64 = season_year_totals(&filtered)?
            .iter()
            .map(|t| t.total_rentals)
            .sum();
        let record_sum: i64 = filtered.records()?.iter().map(|r| r.total_rentals).sum();
        assert_eq!(grouped_sum, record_sum);
        assert_eq!(headline(&filtered)?.map(|h| h.total_rentals), Some(record_sum));
        Ok(())
    }

    #[test]
    fn test_weather_year_totals() -> Result<(), BikeShareError> {
        let totals = weather_year_totals(&daily_fixture())?;
        let keys: Vec<(WeatherCondition, i32, i64)> = totals
            .iter()
            .map(|t| (t.weather, t.year, t.total_rentals))
            .collect();
        assert_eq!(
            keys,
            vec![
                (WeatherCondition::ClearCloudy, 2011, 8954),
                (WeatherCondition::ClearCloudy, 2012, 11500),
                (WeatherCondition::MistCloudy, 2011, 6451),
                (WeatherCondition::LightSnowRain, 2011, 450),
                (WeatherCondition::HeavyRainFog, 2012, 22),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_hourly_profile_means() -> Result<(), BikeShareError> {
        let profile = hourly_profile(&hourly_fixture())?;
        let points: Vec<(DayType, u32, f64)> = profile
            .iter()
            .map(|p| (p.day_type, p.hour, p.mean_rentals))
            .collect();
        assert_eq!(
            points,
            vec![
                (WorkingDay, 8, 300.0),
                (WorkingDay, 17, 250.0),
                (NonWorkingDay, 8, 20.0),
                (NonWorkingDay, 13, 200.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_seasonal_hourly_profile() -> Result<(), BikeShareError> {
        let profile = seasonal_hourly_profile(&hourly_fixture())?;
        let points: Vec<(Season, DayType, u32, f64)> = profile
            .iter()
            .map(|p| (p.season, p.day_type, p.hour, p.mean_rentals))
            .collect();
        assert_eq!(
            points,
            vec![
                (Season::Spring, WorkingDay, 8, 150.0),
                (Season::Spring, WorkingDay, 17, 250.0),
                (Season::Spring, NonWorkingDay, 8, 20.0),
                (Season::Spring, NonWorkingDay, 13, 100.0),
                (Season::Summer, WorkingDay, 8, 600.0),
                (Season::Fall, NonWorkingDay, 13, 300.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_season_user_type_totals_long_form() -> Result<(), BikeShareError> {
        let totals = season_user_type_totals(&daily_fixture())?;
        assert_eq!(totals.len(), 8);
        assert_eq!(
            totals[0],
            SeasonUserTypeTotal {
                season: Season::Spring,
                user_type: UserType::Casual,
                rentals: 690,
            }
        );
        assert_eq!(totals[1].user_type, UserType::Registered);
        assert_eq!(totals[1].rentals, 4007);
        assert_eq!(totals[4].season, Season::Fall);
        assert_eq!(totals[4].rentals, 4096);
        Ok(())
    }

    #[test]
    fn test_headline() -> Result<(), BikeShareError> {
        let headline = headline(&daily_fixture())?.unwrap();
        assert_eq!(
            headline,
            Headline {
                days: 10,
                total_rentals: 27377,
                casual: 8038,
                registered: 19339,
            }
        );
        Ok(())
    }

    #[test]
    fn test_empty_subset_gives_empty_views() -> Result<(), BikeShareError> {
        let daily = daily_fixture().filter(&nothing())?;
        let hourly = hourly_fixture().filter(&nothing())?;
        assert!(season_year_totals(&daily)?.is_empty());
        assert!(weather_year_totals(&daily)?.is_empty());
        assert!(season_user_type_totals(&daily)?.is_empty());
        assert!(hourly_profile(&hourly)?.is_empty());
        assert!(seasonal_hourly_profile(&hourly)?.is_empty());
        assert_eq!(headline(&daily)?, None);
        Ok(())
    }
}
