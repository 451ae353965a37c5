mod aggregate;
mod bike_share;
mod data;
mod error;
mod filtering;
mod report;
mod types;
mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use bike_share::BikeShare;
pub use error::BikeShareError;

pub use data::datasets::{Datasets, FilteredView};
pub use data::error::{ExtractError, LoadError};
pub use data::source::{
    DataSource, Granularity, SourceConfig, DEFAULT_DAILY_URL, DEFAULT_HOURLY_URL,
    DEFAULT_MAX_DOWNLOAD_BYTES,
};

pub use filtering::{label_predicate, RentalFrameFilterExt};

pub use types::calendar::{weekday_label, DateBounds, YearMonth};
pub use types::day_type::DayType;
pub use types::filter_criteria::FilterCriteria;
pub use types::frames::columns;
pub use types::frames::daily_frame::DailyFrame;
pub use types::frames::hourly_frame::HourlyFrame;
pub use types::frames::RentalFrame;
pub use types::records::{DailyRecord, HourlyRecord};
pub use types::season::Season;
pub use types::traits::label::{Label, ParseLabelError};
pub use types::usage::{UsageCluster, UserType, LOW_USAGE_MAX, MEDIUM_USAGE_MAX};
pub use types::weather_condition::WeatherCondition;

pub use aggregate::correlation::{correlation_matrix, CorrelationMatrix, CORRELATED_COLUMNS};
pub use aggregate::grouped::{
    headline, hourly_profile, season_user_type_totals, season_year_totals,
    seasonal_hourly_profile, weather_year_totals, Headline, HourlyProfilePoint,
    SeasonUserTypeTotal, SeasonYearTotal, SeasonalHourlyPoint, WeatherYearTotal,
};
pub use aggregate::monthly::{
    monthly_totals, monthly_usage_clusters, months_by_cluster, ClusterMonths, MonthlyTotal,
    MonthlyUsage,
};
pub use aggregate::snapshot::DashboardSnapshot;
pub use aggregate::weekday::{weekday_distributions, BoxStats, WeekdayDistribution};

pub use report::{render, thousands, Report, NO_DATA};
