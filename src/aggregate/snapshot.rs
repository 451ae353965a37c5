use crate::aggregate::correlation::{correlation_matrix, CorrelationMatrix};
use crate::aggregate::grouped::{
    headline, hourly_profile, season_user_type_totals, season_year_totals,
    seasonal_hourly_profile, weather_year_totals, Headline, HourlyProfilePoint,
    SeasonUserTypeTotal, SeasonYearTotal, SeasonalHourlyPoint, WeatherYearTotal,
};
use crate::aggregate::monthly::{
    monthly_totals, monthly_usage_clusters, months_by_cluster, ClusterMonths, MonthlyTotal,
    MonthlyUsage,
};
use crate::aggregate::weekday::{weekday_distributions, WeekdayDistribution};
use crate::error::BikeShareError;
use crate::types::filter_criteria::FilterCriteria;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;
use crate::types::frames::RentalFrame;
use log::debug;
use serde::Serialize;

/// Every view of the dashboard for one selection, ready to hand to a rendering layer.
///
/// Daily-based views are empty when the daily subset is, hourly-based views when the
/// hourly subset is. The two are independent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub criteria: FilterCriteria,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub headline: Option<Headline>,
    pub season_year_totals: Vec<SeasonYearTotal>,
    pub hourly_profile: Vec<HourlyProfilePoint>,
    pub weather_year_totals: Vec<WeatherYearTotal>,
    pub monthly_totals: Vec<MonthlyTotal>,
    pub weekday_distributions: Vec<WeekdayDistribution>,
    pub correlation: CorrelationMatrix,
    pub seasonal_hourly_profile: Vec<SeasonalHourlyPoint>,
    pub season_user_type_totals: Vec<SeasonUserTypeTotal>,
    pub monthly_usage: Vec<MonthlyUsage>,
    pub cluster_months: Vec<ClusterMonths>,
}

impl DashboardSnapshot {
    /// Derives all views from already filtered subsets.
    pub fn build(
        criteria: &FilterCriteria,
        daily: &DailyFrame,
        hourly: &HourlyFrame,
    ) -> Result<Self, BikeShareError> {
        debug!(
            "Building snapshot over {} daily and {} hourly rows",
            daily.len(),
            hourly.len()
        );
        let monthly_usage = monthly_usage_clusters(daily)?;
        Ok(Self {
            criteria: criteria.clone(),
            daily_rows: daily.len(),
            hourly_rows: hourly.len(),
            headline: headline(daily)?,
            season_year_totals: season_year_totals(daily)?,
            hourly_profile: hourly_profile(hourly)?,
            weather_year_totals: weather_year_totals(daily)?,
            monthly_totals: monthly_totals(daily)?,
            weekday_distributions: weekday_distributions(daily)?,
            correlation: correlation_matrix(daily)?,
            seasonal_hourly_profile: seasonal_hourly_profile(hourly)?,
            season_user_type_totals: season_user_type_totals(daily)?,
            cluster_months: months_by_cluster(&monthly_usage),
            monthly_usage,
        })
    }

    /// Pretty-printed JSON of the whole snapshot.
    pub fn to_json(&self) -> Result<String, BikeShareError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{daily_fixture, date, hourly_fixture};

    fn snapshot_for(criteria: &FilterCriteria) -> Result<DashboardSnapshot, BikeShareError> {
        let daily = daily_fixture().filter(criteria)?;
        let hourly = hourly_fixture().filter(criteria)?;
        DashboardSnapshot::build(criteria, &daily, &hourly)
    }

    #[test]
    fn test_snapshot_over_everything() -> Result<(), BikeShareError> {
        let bounds = daily_fixture().date_bounds()?.unwrap();
        let snapshot = snapshot_for(&FilterCriteria::everything(bounds))?;
        assert_eq!(snapshot.daily_rows, 10);
        assert_eq!(snapshot.hourly_rows, 8);
        assert_eq!(snapshot.monthly_usage.len(), snapshot.monthly_totals.len());
        assert_eq!(snapshot.cluster_months.len(), 3);
        assert_eq!(snapshot.weekday_distributions.len(), 4);
        assert!(!snapshot.correlation.is_empty());
        Ok(())
    }

    #[test]
    fn test_range_without_rows_empties_every_view() -> Result<(), BikeShareError> {
        let criteria = FilterCriteria::builder()
            .start_date(date(2013, 1, 1))
            .end_date(date(2013, 12, 31))
            .build();
        let snapshot = snapshot_for(&criteria)?;
        assert_eq!(snapshot.daily_rows, 0);
        assert_eq!(snapshot.hourly_rows, 0);
        assert_eq!(snapshot.headline, None);
        assert!(snapshot.season_year_totals.is_empty());
        assert!(snapshot.hourly_profile.is_empty());
        assert!(snapshot.weather_year_totals.is_empty());
        assert!(snapshot.monthly_totals.is_empty());
        assert!(snapshot.weekday_distributions.is_empty());
        assert!(snapshot.correlation.is_empty());
        assert!(snapshot.seasonal_hourly_profile.is_empty());
        assert!(snapshot.season_user_type_totals.is_empty());
        assert!(snapshot.monthly_usage.is_empty());
        assert!(snapshot.cluster_months.is_empty());
        Ok(())
    }

    #[test]
    fn test_to_json_uses_display_labels() -> Result<(), Box<dyn std::error::Error>> {
        let criteria = FilterCriteria::builder()
            .start_date(date(2011, 1, 1))
            .end_date(date(2011, 1, 31))
            .build();
        let json: serde_json::Value = serde_json::from_str(&snapshot_for(&criteria)?.to_json()?)?;

        assert_eq!(json["criteria"]["start_date"], "2011-01-01");
        assert_eq!(json["season_year_totals"][0]["season"], "Spring");
        assert_eq!(json["monthly_totals"][0]["month"], "2011-01");
        assert_eq!(json["hourly_profile"][0]["day_type"], "Working Day");
        assert_eq!(json["season_user_type_totals"][0]["user_type"], "casual");
        assert_eq!(json["cluster_months"][0]["cluster"], "Low");
        Ok(())
    }
}
