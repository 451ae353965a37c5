//! The four inputs the dashboard's control surface passes to the filter pipeline.

use crate::types::calendar::DateBounds;
use crate::types::season::Season;
use crate::types::traits::label::Label;
use crate::types::weather_condition::WeatherCondition;
use bon::Builder;
use chrono::NaiveDate;
use serde::Serialize;

/// Date window plus allowed season and weather labels.
///
/// An empty `seasons` (or `weather`) list places no restriction on that attribute;
/// it does not exclude every row.
///
/// # Examples
///
/// ```
/// use bikeshare::{FilterCriteria, Season};
/// use chrono::NaiveDate;
///
/// let criteria = FilterCriteria::builder()
///     .start_date(NaiveDate::from_ymd_opt(2011, 6, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2011, 8, 31).unwrap())
///     .seasons(vec![Season::Summer])
///     .build();
///
/// assert!(criteria.weather.is_empty());
/// assert!(criteria.allows_season(Season::Summer));
/// assert!(!criteria.allows_season(Season::Winter));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct FilterCriteria {
    /// First date kept (inclusive).
    pub start_date: NaiveDate,
    /// Last date kept (inclusive).
    pub end_date: NaiveDate,
    #[builder(default)]
    pub seasons: Vec<Season>,
    #[builder(default)]
    pub weather: Vec<WeatherCondition>,
}

impl FilterCriteria {
    /// The dashboard's initial state: the full loaded range with every label selected.
    pub fn everything(bounds: DateBounds) -> Self {
        Self {
            start_date: bounds.start,
            end_date: bounds.end,
            seasons: Season::ALL.to_vec(),
            weather: WeatherCondition::ALL.to_vec(),
        }
    }

    /// Clamps both dates into `bounds`, as the date inputs of the control surface do.
    pub fn clamped_to(&self, bounds: DateBounds) -> Self {
        Self {
            start_date: bounds.clamp(self.start_date),
            end_date: bounds.clamp(self.end_date),
            ..self.clone()
        }
    }

    pub fn date_window(&self) -> DateBounds {
        DateBounds::new(self.start_date, self.end_date)
    }

    pub fn allows_date(&self, date: NaiveDate) -> bool {
        self.date_window().contains(date)
    }

    pub fn allows_season(&self, season: Season) -> bool {
        self.seasons.is_empty() || self.seasons.contains(&season)
    }

    pub fn allows_weather(&self, weather: WeatherCondition) -> bool {
        self.weather.is_empty() || self.weather.contains(&weather)
    }

    /// True when the season or weather selection is narrower than "all".
    pub fn restricts_labels(&self) -> bool {
        fn narrows<T: Label>(selected: &[T]) -> bool {
            !selected.is_empty() && T::ALL.iter().any(|label| !selected.contains(label))
        }
        narrows(&self.seasons) || narrows(&self.weather)
    }
}
