//! Calendar-month trend and the usage clustering built on it.

use crate::aggregate::int_values;
use crate::error::BikeShareError;
use crate::types::calendar::YearMonth;
use crate::types::frames::columns::{CASUAL, MONTH, REGISTERED, TOTAL_RENTALS, YEAR};
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::RentalFrame;
use crate::types::usage::UsageCluster;
use polars::prelude::col;
use serde::Serialize;

/// Rental sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub casual: i64,
    pub registered: i64,
    pub total_rentals: i64,
}

/// A month's total together with its usage bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyUsage {
    pub month: YearMonth,
    pub total_rentals: i64,
    pub cluster: UsageCluster,
}

/// The months that fell into one usage bucket, chronologically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterMonths {
    pub cluster: UsageCluster,
    pub months: Vec<YearMonth>,
}

/// Casual, registered and total rentals per year-month, in chronological order.
pub fn monthly_totals(daily: &DailyFrame) -> Result<Vec<MonthlyTotal>, BikeShareError> {
    let df = daily
        .lazy()
        .group_by_stable([col(YEAR), col(MONTH)])
        .agg([
            col(CASUAL).sum(),
            col(REGISTERED).sum(),
            col(TOTAL_RENTALS).sum(),
        ])
        .collect()?;

    let years = int_values(&df, YEAR)?;
    let months = int_values(&df, MONTH)?;
    let casual = int_values(&df, CASUAL)?;
    let registered = int_values(&df, REGISTERED)?;
    let totals = int_values(&df, TOTAL_RENTALS)?;

    let mut rows: Vec<MonthlyTotal> = (0..df.height())
        .map(|row| MonthlyTotal {
            month: YearMonth::new(years[row] as i32, months[row] as u32),
            casual: casual[row],
            registered: registered[row],
            total_rentals: totals[row],
        })
        .collect();
    rows.sort_by_key(|r| r.month);
    Ok(rows)
}

/// Buckets every month of the subset with [`UsageCluster::classify`].
pub fn monthly_usage_clusters(daily: &DailyFrame) -> Result<Vec<MonthlyUsage>, BikeShareError> {
    Ok(monthly_totals(daily)?
        .into_iter()
        .map(|m| MonthlyUsage {
            month: m.month,
            total_rentals: m.total_rentals,
            cluster: UsageCluster::classify(m.total_rentals),
        })
        .collect())
}

/// Groups classified months by bucket, Low first.
///
/// Every bucket is listed (possibly with no months) unless `usage` itself is empty.
pub fn months_by_cluster(usage: &[MonthlyUsage]) -> Vec<ClusterMonths> {
    if usage.is_empty() {
        return Vec::new();
    }
    UsageCluster::ALL
        .into_iter()
        .map(|cluster| ClusterMonths {
            cluster,
            months: usage
                .iter()
                .filter(|m| m.cluster == cluster)
                .map(|m| m.month)
                .collect(),
        })
        .collect()
}
