//! The entry point of the crate: a session object that loads both rental datasets once
//! and hands out filtered views of them.

use crate::data::datasets::{Datasets, FilteredView};
use crate::data::loader::DatasetLoader;
use crate::data::source::{Granularity, SourceConfig};
use crate::error::BikeShareError;
use crate::types::filter_criteria::FilterCriteria;
use crate::types::frames::RentalFrame;
use crate::types::season::Season;
use crate::types::weather_condition::WeatherCondition;
use bon::bon;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// A dashboard session over the daily and hourly rental datasets.
///
/// The datasets are fetched and validated on first use and then kept for the lifetime of
/// the value, so every later call returns the same [`Arc`]. A failed load is not remembered:
/// the next call tries again from scratch.
///
/// # Examples
///
/// ```rust,no_run
/// # use bikeshare::{BikeShare, BikeShareError, Season};
/// # async fn run() -> Result<(), BikeShareError> {
/// let bike_share = BikeShare::new();
///
/// let summer = bike_share
///     .filtered()
///     .seasons(vec![Season::Summer])
///     .call()
///     .await?;
/// println!("{}", summer.snapshot()?.to_json()?);
/// # Ok(())
/// # }
/// ```
pub struct BikeShare {
    loader: DatasetLoader,
    sources: SourceConfig,
    datasets: OnceCell<Arc<Datasets>>,
}

impl Default for BikeShare {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl BikeShare {
    /// A session reading the published remote datasets.
    pub fn new() -> Self {
        Self::with_sources(SourceConfig::default())
    }

    /// A session reading the given sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare::{BikeShare, DataSource, SourceConfig};
    ///
    /// let bike_share = BikeShare::with_sources(
    ///     SourceConfig::builder()
    ///         .daily(DataSource::File("day.csv".into()))
    ///         .hourly(DataSource::File("hour.csv".into()))
    ///         .max_download_bytes(16 * 1024 * 1024)
    ///         .build(),
    /// );
    /// assert_eq!(bike_share.sources().max_download_bytes, 16 * 1024 * 1024);
    /// ```
    pub fn with_sources(sources: SourceConfig) -> Self {
        Self {
            loader: DatasetLoader::new(sources.max_download_bytes),
            sources,
            datasets: OnceCell::new(),
        }
    }

    pub fn sources(&self) -> &SourceConfig {
        &self.sources
    }

    /// Both datasets, loading them on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::Load`] if either dataset cannot be fetched, decompressed,
    /// parsed or validated. Nothing is kept in that case.
    pub async fn datasets(&self) -> Result<Arc<Datasets>, BikeShareError> {
        let datasets = self.datasets.get_or_try_init(|| self.load()).await?;
        Ok(Arc::clone(datasets))
    }

    async fn load(&self) -> Result<Arc<Datasets>, BikeShareError> {
        let (daily, hourly) = tokio::try_join!(
            self.loader.load_daily(self.sources.source(Granularity::Daily)),
            self.loader.load_hourly(self.sources.source(Granularity::Hourly)),
        )?;
        info!(
            "Datasets ready: {} daily rows, {} hourly rows",
            daily.len(),
            hourly.len()
        );
        Ok(Arc::new(Datasets { daily, hourly }))
    }

    /// Filters both datasets with the four control-surface inputs.
    ///
    /// Omitted dates default to the first and last loaded date, and given dates are clamped
    /// into that range. Empty label lists select every label.
    #[builder]
    pub async fn filtered(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        #[builder(default)] seasons: Vec<Season>,
        #[builder(default)] weather: Vec<WeatherCondition>,
    ) -> Result<FilteredView, BikeShareError> {
        let datasets = self.datasets().await?;
        let bounds = datasets.date_bounds()?;

        let criteria = FilterCriteria {
            start_date: start_date
                .or(bounds.map(|b| b.start))
                .unwrap_or(NaiveDate::MIN),
            end_date: end_date.or(bounds.map(|b| b.end)).unwrap_or(NaiveDate::MAX),
            seasons,
            weather,
        };
        let criteria = match bounds {
            Some(bounds) => criteria.clamped_to(bounds),
            None => criteria,
        };
        datasets.filter(&criteria)
    }
}
