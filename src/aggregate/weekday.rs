use crate::aggregate::int_list_values;
use crate::data::error::ExtractError;
use crate::error::BikeShareError;
use crate::types::calendar::weekday_label;
use crate::types::frames::columns::{CASUAL, REGISTERED, TOTAL_RENTALS, WEEKDAY};
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::RentalFrame;
use crate::types::usage::UserType;
use chrono::Weekday;
use polars::prelude::{col, DataFrame};
use serde::{Serialize, Serializer};

/// Daily rental counts observed on one day of the week, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayDistribution {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub total_rentals: Vec<i64>,
    pub casual: Vec<i64>,
    pub registered: Vec<i64>,
}

impl WeekdayDistribution {
    /// The counts of one rider population, or of all riders for `None`.
    pub fn values(&self, user_type: Option<UserType>) -> &[i64] {
        match user_type {
            None => &self.total_rentals,
            Some(UserType::Casual) => &self.casual,
            Some(UserType::Registered) => &self.registered,
        }
    }
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_label(*weekday))
}

/// Five-number summary of a box plot.
///
/// Quartiles use linear interpolation between the closest ranks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    /// Summarizes `values`, or returns `None` when there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare::BoxStats;
    ///
    /// let stats = BoxStats::from_values(&[4, 1, 3, 2]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.q1, 1.75);
    /// ```
    pub fn from_values(values: &[i64]) -> Option<BoxStats> {
        if values.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = values.iter().map(|v| *v as f64).collect();
        sorted.sort_by(f64::total_cmp);

        let quantile = |p: f64| {
            let rank = p * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
        };
        Some(BoxStats {
            min: sorted[0],
            q1: quantile(0.25),
            median: quantile(0.5),
            q3: quantile(0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

fn weekday_values(df: &DataFrame) -> Result<Vec<Weekday>, BikeShareError> {
    df.column(WEEKDAY)?
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.and_then(|v| v.parse::<Weekday>().ok()).ok_or_else(|| {
                BikeShareError::from(ExtractError::InvalidValue {
                    column: WEEKDAY.to_string(),
                    row,
                    value: value.unwrap_or("null").to_string(),
                })
            })
        })
        .collect()
}

/// Per-weekday value lists of total, casual and registered counts.
///
/// Monday comes first and only weekdays present in the subset are listed.
pub fn weekday_distributions(
    daily: &DailyFrame,
) -> Result<Vec<WeekdayDistribution>, BikeShareError> {
    let df = daily
        .lazy()
        .group_by_stable([col(WEEKDAY)])
        .agg([col(TOTAL_RENTALS), col(CASUAL), col(REGISTERED)])
        .collect()?;

    let mut distributions: Vec<WeekdayDistribution> = weekday_values(&df)?
        .into_iter()
        .zip(int_list_values(&df, TOTAL_RENTALS)?)
        .zip(int_list_values(&df, CASUAL)?)
        .zip(int_list_values(&df, REGISTERED)?)
        .map(
            |(((weekday, total_rentals), casual), registered)| WeekdayDistribution {
                weekday,
                total_rentals,
                casual,
                registered,
            },
        )
        .collect();
    distributions.sort_by_key(|d| d.weekday.num_days_from_monday());
    Ok(distributions)
}
