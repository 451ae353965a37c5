//! Contains the `HourlyFrame` structure wrapping the canonical hourly rental frame.

use crate::data::extractor::{extract_hours, extract_rows, rows_to_frame};
use crate::error::BikeShareError;
use crate::filtering::RentalFrameFilterExt;
use crate::types::calendar::DateBounds;
use crate::types::filter_criteria::FilterCriteria;
use crate::types::frames::daily_frame::date_bounds;
use crate::types::frames::RentalFrame;
use crate::types::records::{HourlyRecord, RentalRow};
use log::debug;
use polars::prelude::DataFrame;

/// The hourly rental dataset (or a filtered subset of it): one row per date and hour.
///
/// Same contract as [`crate::DailyFrame`], with an extra `hour` column.
#[derive(Debug, Clone)]
pub struct HourlyFrame {
    pub frame: DataFrame,
}

impl HourlyFrame {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn from_records(records: &[HourlyRecord]) -> Result<Self, BikeShareError> {
        let rows: Vec<RentalRow> = records.iter().map(RentalRow::from).collect();
        let hours: Vec<u32> = records.iter().map(|r| r.hour).collect();
        Ok(Self::new(rows_to_frame(&rows, Some(&hours))?))
    }

    /// Keeps the rows whose date, season and weather match `criteria`.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<HourlyFrame, BikeShareError> {
        let frame = self.lazy().filter_criteria(criteria).collect()?;
        debug!(
            "Hourly filter kept {} of {} rows",
            frame.height(),
            self.frame.height()
        );
        Ok(HourlyFrame::new(frame))
    }

    pub fn records(&self) -> Result<Vec<HourlyRecord>, BikeShareError> {
        let rows = extract_rows(&self.frame)?;
        let hours = extract_hours(&self.frame)?;
        Ok(rows
            .into_iter()
            .zip(hours)
            .map(|(row, hour)| row.into_hourly(hour))
            .collect())
    }

    pub fn date_bounds(&self) -> Result<Option<DateBounds>, BikeShareError> {
        date_bounds(&self.frame)
    }
}

impl RentalFrame for HourlyFrame {
    fn data(&self) -> &DataFrame {
        &self.frame
    }
}
