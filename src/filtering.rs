use crate::types::filter_criteria::FilterCriteria;
use crate::types::frames::columns::{DATE, SEASON, WEATHER};
use crate::types::season::Season;
use crate::types::traits::label::Label;
use crate::types::weather_condition::WeatherCondition;
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataType, Expr, LazyFrame};

/// Predicate matching rows whose `column` equals one of `labels`.
///
/// Returns `None` for an empty selection: no label restriction, rather than a predicate
/// that rejects every row.
pub fn label_predicate<T: Label>(column: &str, labels: &[T]) -> Option<Expr> {
    labels
        .iter()
        .map(|label| col(column).eq(lit(label.label())))
        .reduce(|acc, predicate| acc.or(predicate))
}

pub trait RentalFrameFilterExt {
    /// Keeps rows with `start_date <= date <= end_date`.
    fn filter_date_range(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame;

    /// Keeps rows of the given seasons, or every row when `seasons` is empty.
    fn filter_seasons(self, seasons: &[Season]) -> LazyFrame;

    /// Keeps rows of the given weather conditions, or every row when `weather` is empty.
    fn filter_weather(self, weather: &[WeatherCondition]) -> LazyFrame;

    /// Applies the date, season and weather predicates together.
    fn filter_criteria(self, criteria: &FilterCriteria) -> LazyFrame;
}

impl RentalFrameFilterExt for LazyFrame {
    fn filter_date_range(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame {
        self.filter(
            col(DATE)
                .cast(DataType::Date)
                .gt_eq(lit(start_date))
                .and(col(DATE).cast(DataType::Date).lt_eq(lit(end_date))),
        )
    }

    fn filter_seasons(self, seasons: &[Season]) -> LazyFrame {
        match label_predicate(SEASON, seasons) {
            Some(predicate) => self.filter(predicate),
            None => self,
        }
    }

    fn filter_weather(self, weather: &[WeatherCondition]) -> LazyFrame {
        match label_predicate(WEATHER, weather) {
            Some(predicate) => self.filter(predicate),
            None => self,
        }
    }

    fn filter_criteria(self, criteria: &FilterCriteria) -> LazyFrame {
        self.filter_date_range(criteria.start_date, criteria.end_date)
            .filter_seasons(&criteria.seasons)
            .filter_weather(&criteria.weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{daily_fixture, date};
    use crate::types::frames::RentalFrame;

    #[test]
    fn test_filter_date_range_is_inclusive() -> Result<(), Box<dyn std::error::Error>> {
        let daily = daily_fixture();
        let start = date(2011, 1, 2);
        let end = date(2011, 1, 4);

        let filtered = daily
            .lazy()
            .filter_date_range(start, end)
            .collect()?;

        assert_eq!(filtered.height(), 3);
        Ok(())
    }

    #[test]
    fn test_filter_seasons_empty_selection_keeps_all() -> Result<(), Box<dyn std::error::Error>> {
        let daily = daily_fixture();
        let filtered = daily.lazy().filter_seasons(&[]).collect()?;
        assert_eq!(filtered.height(), daily.len());
        Ok(())
    }

    #[test]
    fn test_filter_seasons_and_weather_intersect() -> Result<(), Box<dyn std::error::Error>> {
        let daily = daily_fixture();
        let filtered = daily
            .lazy()
            .filter_seasons(&[Season::Summer, Season::Fall])
            .filter_weather(&[WeatherCondition::ClearCloudy])
            .collect()?;

        let seasons = filtered.column(SEASON)?.str()?;
        let weather = filtered.column(WEATHER)?.str()?;
        for row in 0..filtered.height() {
            assert!(matches!(seasons.get(row), Some("Summer") | Some("Fall")));
            assert_eq!(weather.get(row), Some("Clear/Cloudy"));
        }
        Ok(())
    }

    #[test]
    fn test_label_predicate_is_none_for_empty_selection() {
        assert!(label_predicate::<Season>(SEASON, &[]).is_none());
        assert!(label_predicate(SEASON, &[Season::Winter]).is_some());
    }
}
