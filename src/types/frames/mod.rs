pub mod daily_frame;
pub mod hourly_frame;

use polars::prelude::{DataFrame, IntoLazy, LazyFrame};

/// Column names of the canonical rental frames.
pub mod columns {
    pub const DATE: &str = "date";
    pub const HOUR: &str = "hour";
    pub const SEASON: &str = "season";
    pub const YEAR: &str = "year";
    pub const MONTH: &str = "month";
    pub const WEEKDAY: &str = "weekday";
    pub const WORKING_DAY: &str = "workingday";
    pub const WEATHER: &str = "weather_condition";
    pub const HOLIDAY: &str = "holiday";
    pub const TEMPERATURE: &str = "temperature";
    pub const FEELING_TEMPERATURE: &str = "feeling_temperature";
    pub const HUMIDITY: &str = "humidity";
    pub const WINDSPEED: &str = "windspeed";
    pub const CASUAL: &str = "casual";
    pub const REGISTERED: &str = "registered";
    pub const TOTAL_RENTALS: &str = "total_rentals";
}

/// Access to the materialized polars frame behind [`daily_frame::DailyFrame`] and
/// [`hourly_frame::HourlyFrame`], so aggregations can run on either granularity.
pub trait RentalFrame {
    fn data(&self) -> &DataFrame;

    fn lazy(&self) -> LazyFrame {
        self.data().clone().lazy()
    }

    fn len(&self) -> usize {
        self.data().height()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
