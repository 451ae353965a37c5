//! Defines where the rental datasets come from and which columns each granularity must carry.

use bon::Builder;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_DAILY_URL: &str = "https://raw.githubusercontent.com/nurimammasri/Belajar-Analisis-Data-Python-Dicoding/refs/heads/main/dashboard/dashboard_main_data_day.csv";
pub const DEFAULT_HOURLY_URL: &str = "https://raw.githubusercontent.com/nurimammasri/Belajar-Analisis-Data-Python-Dicoding/refs/heads/main/dashboard/dashboard_main_data_hour.csv";

/// 256 MiB, far above the size of either dataset.
pub const DEFAULT_MAX_DOWNLOAD_BYTES: u64 = 256 * 1024 * 1024;

/// The time granularity of a rental dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One row per calendar date.
    Daily,
    /// One row per date and hour of day.
    Hourly,
}

impl Granularity {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Hourly => "hourly",
        }
    }

    /// Header columns the source must provide. Any other column is ignored.
    pub(crate) fn required_columns(&self) -> Vec<&'static str> {
        let mut columns = vec![
            "date",
            "season",
            "year",
            "month",
            "weekday",
            "workingday",
            "weather_condition",
            "holiday",
            "temperature",
            "feeling_temperature",
            "humidity",
            "windspeed",
            "casual",
            "registered",
            "total_rentals",
        ];
        if *self == Granularity::Hourly {
            columns.insert(1, "hour");
        }
        columns
    }
}

/// Formats a `Granularity` as `daily` or `hourly`.
///
/// # Examples
///
/// ```
/// use bikeshare::Granularity;
///
/// assert_eq!(Granularity::Hourly.to_string(), "hourly");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A CSV resource with a header row. Locations ending in `.gz` are gunzipped while reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl DataSource {
    pub(crate) fn is_gzipped(&self) -> bool {
        match self {
            DataSource::Remote(url) => url
                .split(['?', '#'])
                .next()
                .is_some_and(|path| path.ends_with(".gz")),
            DataSource::File(path) => path.extension().is_some_and(|ext| ext == "gz"),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Locations of both datasets and the download size cap.
///
/// # Examples
///
/// ```
/// use bikeshare::{DataSource, SourceConfig};
///
/// let config = SourceConfig::builder()
///     .daily(DataSource::File("data/day.csv".into()))
///     .hourly(DataSource::File("data/hour.csv.gz".into()))
///     .build();
/// assert_eq!(config.max_download_bytes, 256 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SourceConfig {
    pub daily: DataSource,
    pub hourly: DataSource,
    #[builder(default = DEFAULT_MAX_DOWNLOAD_BYTES)]
    pub max_download_bytes: u64,
}

impl SourceConfig {
    pub(crate) fn source(&self, granularity: Granularity) -> &DataSource {
        match granularity {
            Granularity::Daily => &self.daily,
            Granularity::Hourly => &self.hourly,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            daily: DataSource::Remote(DEFAULT_DAILY_URL.to_string()),
            hourly: DataSource::Remote(DEFAULT_HOURLY_URL.to_string()),
            max_download_bytes: DEFAULT_MAX_DOWNLOAD_BYTES,
        }
    }
}
