//! Contains the `DailyFrame` structure wrapping the canonical daily rental frame.

use crate::data::extractor::{extract_rows, rows_to_frame};
use crate::error::BikeShareError;
use crate::filtering::RentalFrameFilterExt;
use crate::types::calendar::DateBounds;
use crate::types::filter_criteria::FilterCriteria;
use crate::types::frames::columns::DATE;
use crate::types::frames::RentalFrame;
use crate::types::records::{DailyRecord, RentalRow};
use crate::utils::date_from_epoch_days;
use log::debug;
use polars::prelude::{DataFrame, DataType};

/// The daily rental dataset (or a filtered subset of it) as a polars `DataFrame`.
///
/// Every operation returns a *new* `DailyFrame`; the wrapped frame is never mutated,
/// and cloning is cheap because polars shares column buffers.
///
/// Instances are obtained from [`crate::Datasets`] or built with [`DailyFrame::from_records`].
#[derive(Debug, Clone)]
pub struct DailyFrame {
    /// The underlying frame in the canonical column layout.
    pub frame: DataFrame,
}

impl DailyFrame {
    /// Wraps a frame that already has the canonical daily layout.
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Builds the canonical frame from typed records, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::Extract`] if polars rejects one of the built columns.
    pub fn from_records(records: &[DailyRecord]) -> Result<Self, BikeShareError> {
        let rows: Vec<RentalRow> = records.iter().map(RentalRow::from).collect();
        Ok(Self::new(rows_to_frame(&rows, None)?))
    }

    /// Keeps the rows matching `criteria`.
    ///
    /// The date window is inclusive at both ends. An empty season or weather selection
    /// places no restriction on that attribute. Row order is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use bikeshare::{DailyFrame, FilterCriteria, RentalFrame, Season};
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), bikeshare::BikeShareError> {
    /// let empty = DailyFrame::from_records(&[])?;
    /// let criteria = FilterCriteria::builder()
    ///     .start_date(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap())
    ///     .end_date(NaiveDate::from_ymd_opt(2011, 12, 31).unwrap())
    ///     .seasons(vec![Season::Fall])
    ///     .build();
    /// assert!(empty.filter(&criteria)?.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<DailyFrame, BikeShareError> {
        let frame = self.lazy().filter_criteria(criteria).collect()?;
        debug!(
            "Daily filter kept {} of {} rows",
            frame.height(),
            self.frame.height()
        );
        Ok(DailyFrame::new(frame))
    }

    /// Converts the frame back into typed records.
    pub fn records(&self) -> Result<Vec<DailyRecord>, BikeShareError> {
        Ok(extract_rows(&self.frame)?
            .into_iter()
            .map(RentalRow::into_daily)
            .collect())
    }

    /// First and last date present, or `None` for an empty frame.
    pub fn date_bounds(&self) -> Result<Option<DateBounds>, BikeShareError> {
        date_bounds(&self.frame)
    }
}

impl RentalFrame for DailyFrame {
    fn data(&self) -> &DataFrame {
        &self.frame
    }
}

pub(crate) fn date_bounds(frame: &DataFrame) -> Result<Option<DateBounds>, BikeShareError> {
    let days = frame.column(DATE)?.cast(&DataType::Int32)?;
    let days = days.i32()?;
    let bounds = days
        .into_iter()
        .flatten()
        .filter_map(date_from_epoch_days)
        .fold(None, |bounds: Option<DateBounds>, date| match bounds {
            None => Some(DateBounds::new(date, date)),
            Some(b) => Some(DateBounds::new(b.start.min(date), b.end.max(date))),
        });
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{daily_fixture, daily_records, date};
    use crate::types::traits::label::Label;
    use crate::{Season, WeatherCondition};

    fn criteria(start: (i32, u32, u32), end: (i32, u32, u32)) -> FilterCriteria {
        FilterCriteria::builder()
            .start_date(date(start.0, start.1, start.2))
            .end_date(date(end.0, end.1, end.2))
            .build()
    }

    #[test]
    fn test_records_round_trip() -> Result<(), BikeShareError> {
        let records = daily_records();
        let frame = DailyFrame::from_records(&records)?;
        assert_eq!(frame.len(), records.len());
        assert_eq!(frame.records()?, records);
        Ok(())
    }

    #[test]
    fn test_filter_respects_every_predicate() -> Result<(), BikeShareError> {
        let daily = daily_fixture();
        let mut criteria = criteria((2011, 1, 2), (2012, 4, 30));
        criteria.seasons = vec![Season::Spring, Season::Summer];
        criteria.weather = vec![WeatherCondition::ClearCloudy];

        let records = daily.filter(&criteria)?.records()?;
        assert!(!records.is_empty());
        for record in &records {
            assert!(criteria.allows_date(record.date));
            assert!(criteria.seasons.contains(&record.season));
            assert_eq!(record.weather, WeatherCondition::ClearCloudy);
            assert_eq!(record.total_rentals, record.casual + record.registered);
        }
        Ok(())
    }

    #[test]
    fn test_filter_matches_record_level_predicate() -> Result<(), BikeShareError> {
        let daily = daily_fixture();
        let mut criteria = criteria((2011, 1, 1), (2012, 12, 31));
        criteria.weather = vec![WeatherCondition::MistCloudy, WeatherCondition::HeavyRainFog];

        let expected: Vec<DailyRecord> = daily_records()
            .into_iter()
            .filter(|r| {
                criteria.allows_date(r.date)
                    && criteria.allows_season(r.season)
                    && criteria.allows_weather(r.weather)
            })
            .collect();
        assert_eq!(daily.filter(&criteria)?.records()?, expected);
        Ok(())
    }

    #[test]
    fn test_empty_selection_equals_full_selection() -> Result<(), BikeShareError> {
        let daily = daily_fixture();
        let mut empty = criteria((2011, 1, 1), (2012, 12, 31));
        empty.weather = vec![WeatherCondition::ClearCloudy];
        let mut full = empty.clone();
        full.seasons = Season::ALL.to_vec();

        assert_eq!(daily.filter(&empty)?.records()?, daily.filter(&full)?.records()?);
        Ok(())
    }

    #[test]
    fn test_filter_does_not_mutate_source() -> Result<(), BikeShareError> {
        let daily = daily_fixture();
        let before = daily.len();
        let filtered = daily.filter(&criteria((2011, 7, 1), (2011, 7, 31)))?;
        assert_eq!(filtered.len(), 2);
        assert_eq!(daily.len(), before);
        Ok(())
    }

    #[test]
    fn test_inverted_range_is_empty() -> Result<(), BikeShareError> {
        let daily = daily_fixture();
        let filtered = daily.filter(&criteria((2012, 1, 1), (2011, 1, 1)))?;
        assert!(filtered.is_empty());
        Ok(())
    }

    #[test]
    fn test_date_bounds() -> Result<(), BikeShareError> {
        let bounds = daily_fixture().date_bounds()?.unwrap();
        assert_eq!(bounds.start, date(2011, 1, 1));
        assert_eq!(bounds.end, date(2012, 10, 29));
        assert_eq!(DailyFrame::from_records(&[])?.date_bounds()?, None);
        Ok(())
    }
}
