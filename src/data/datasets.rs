use crate::aggregate::snapshot::DashboardSnapshot;
use crate::error::BikeShareError;
use crate::types::calendar::DateBounds;
use crate::types::filter_criteria::FilterCriteria;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;

/// Both loaded datasets. Immutable once loaded; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub daily: DailyFrame,
    pub hourly: HourlyFrame,
}

impl Datasets {
    /// Date range of the daily dataset, which bounds the date inputs of the dashboard.
    pub fn date_bounds(&self) -> Result<Option<DateBounds>, BikeShareError> {
        self.daily.date_bounds()
    }

    /// Full range with every label selected, or `None` when the daily dataset is empty.
    pub fn default_criteria(&self) -> Result<Option<FilterCriteria>, BikeShareError> {
        Ok(self.date_bounds()?.map(FilterCriteria::everything))
    }

    /// Applies the same criteria to both datasets.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<FilteredView, BikeShareError> {
        Ok(FilteredView {
            criteria: criteria.clone(),
            daily: self.daily.filter(criteria)?,
            hourly: self.hourly.filter(criteria)?,
        })
    }
}

/// The daily and hourly subsets selected by one set of criteria.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub criteria: FilterCriteria,
    pub daily: DailyFrame,
    pub hourly: HourlyFrame,
}

impl FilteredView {
    pub fn snapshot(&self) -> Result<DashboardSnapshot, BikeShareError> {
        DashboardSnapshot::build(&self.criteria, &self.daily, &self.hourly)
    }
}
