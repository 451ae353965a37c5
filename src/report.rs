//! Plain-text rendering of a [`DashboardSnapshot`].
//!
//! Each section checks its own input subset and prints [`NO_DATA`] instead of its body when
//! that subset is empty, so one empty view never hides another.

use crate::aggregate::snapshot::DashboardSnapshot;
use crate::aggregate::weekday::BoxStats;
use crate::types::calendar::weekday_label;
use crate::types::traits::label::Label;
use crate::types::usage::UserType;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Printed in place of a section whose input subset has no rows.
pub const NO_DATA: &str = "No data for this selection.";

const CONCLUSIONS: [&str; 8] = [
    "Season strongly shapes demand: Fall and Summer lead, Spring is lowest, and every season grew from 2011 to 2012.",
    "Working days show commuter peaks in the morning and evening; non-working days peak around midday.",
    "Clear weather brings the most rentals and bad weather cuts them sharply.",
    "Monthly rentals grew from 2011 to 2012 with a clear mid-year peak; registered riders dominate.",
    "Weekends have higher median total and casual rentals; registered rentals are steadier on working days.",
    "Temperature correlates strongly and positively with rentals; wind speed moderately and humidity weakly negatively.",
    "The hourly commuter and leisure patterns persist in every season with season-dependent intensity.",
    "Bucketing months by volume separates low, medium and high usage periods for operational planning.",
];

/// Formats an integer with `,` thousands separators.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Displays a snapshot as the text dashboard.
pub struct Report<'a>(pub &'a DashboardSnapshot);

/// Renders the whole text dashboard.
pub fn render(snapshot: &DashboardSnapshot) -> String {
    Report(snapshot).to_string()
}

fn section(
    f: &mut Formatter<'_>,
    title: &str,
    has_data: bool,
    body: impl FnOnce(&mut Formatter<'_>) -> fmt::Result,
    insights: &[&str],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))?;
    if !has_data {
        return writeln!(f, "{NO_DATA}");
    }
    body(f)?;
    if !insights.is_empty() {
        writeln!(f, "Insights:")?;
        for insight in insights {
            writeln!(f, "  - {insight}")?;
        }
    }
    Ok(())
}

fn box_line(f: &mut Formatter<'_>, name: &str, stats: Option<BoxStats>) -> fmt::Result {
    match stats {
        Some(s) => writeln!(
            f,
            "    {name:<10} min {:>8.0}  q1 {:>8.1}  median {:>8.1}  q3 {:>8.1}  max {:>8.0}",
            s.min, s.q1, s.median, s.q3, s.max
        ),
        None => writeln!(f, "    {name:<10} -"),
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let criteria = &s.criteria;
        let has_daily = s.daily_rows > 0;
        let has_hourly = s.hourly_rows > 0;

        writeln!(f, "Bike Sharing Rental Dashboard")?;
        writeln!(f, "=============================")?;
        writeln!(
            f,
            "Data from {} to {}",
            criteria.start_date.format("%d %B %Y"),
            criteria.end_date.format("%d %B %Y")
        )?;
        if criteria.restricts_labels() {
            let seasons: Vec<&str> = criteria.seasons.iter().map(|l| l.label()).collect();
            let weather: Vec<&str> = criteria.weather.iter().map(|l| l.label()).collect();
            writeln!(
                f,
                "Filtered to seasons: {} and weather: {}",
                seasons.join(", "),
                weather.join(", ")
            )?;
        }

        section(
            f,
            "Headline metrics (daily data)",
            has_daily,
            |f| match &s.headline {
                Some(h) => {
                    writeln!(f, "  Total rentals:      {}", thousands(h.total_rentals))?;
                    writeln!(f, "  Casual riders:      {}", thousands(h.casual))?;
                    writeln!(f, "  Registered riders:  {}", thousands(h.registered))
                }
                None => Ok(()),
            },
            &[],
        )?;

        section(
            f,
            "1. Total rentals by season and year",
            has_daily,
            |f| {
                for row in &s.season_year_totals {
                    writeln!(
                        f,
                        "  {:<8} {}  {:>12}",
                        row.season.label(),
                        row.year,
                        thousands(row.total_rentals)
                    )?;
                }
                Ok(())
            },
            &[
                "Rentals rose from 2011 to 2012 in every season.",
                "Fall has the most rentals, followed by Summer and Winter; Spring is lowest.",
            ],
        )?;

        section(
            f,
            "2. Average rentals per hour by day type",
            has_hourly,
            |f| {
                for point in &s.hourly_profile {
                    writeln!(
                        f,
                        "  {:<16} {:02}:00  {:>8.1}",
                        point.day_type.label(),
                        point.hour,
                        point.mean_rentals
                    )?;
                }
                Ok(())
            },
            &[
                "Working days peak at 7-9 and 17-19, the commuter pattern.",
                "Non-working days spread out with a leisure peak between 10 and 17.",
            ],
        )?;

        section(
            f,
            "3. Total rentals by weather condition and year",
            has_daily,
            |f| {
                for row in &s.weather_year_totals {
                    writeln!(
                        f,
                        "  {:<16} {}  {:>12}",
                        row.weather.label(),
                        row.year,
                        thousands(row.total_rentals)
                    )?;
                }
                Ok(())
            },
            &[
                "Clear or cloudy days have the most rentals.",
                "Rentals drop in mist and are very low in light snow or rain.",
            ],
        )?;

        section(
            f,
            "4. Monthly rental trend",
            has_daily,
            |f| {
                writeln!(f, "  {:<8} {:>10} {:>12} {:>12}", "month", "casual", "registered", "total")?;
                for month in &s.monthly_totals {
                    writeln!(
                        f,
                        "  {:<8} {:>10} {:>12} {:>12}",
                        month.month.to_string(),
                        thousands(month.casual),
                        thousands(month.registered),
                        thousands(month.total_rentals)
                    )?;
                }
                Ok(())
            },
            &[
                "Rentals trend upward from 2011 to 2012 with a mid-year peak.",
                "Registered riders dominate and account for most of the growth.",
            ],
        )?;

        section(
            f,
            "5. Daily rental distribution by weekday",
            has_daily,
            |f| {
                for day in &s.weekday_distributions {
                    writeln!(f, "  {}", weekday_label(day.weekday))?;
                    box_line(f, "total", BoxStats::from_values(day.values(None)))?;
                    for user_type in UserType::ALL {
                        box_line(
                            f,
                            user_type.column(),
                            BoxStats::from_values(day.values(Some(user_type))),
                        )?;
                    }
                }
                Ok(())
            },
            &[
                "Weekends have a higher median of total daily rentals.",
                "Casual rentals are higher and more variable on weekends; registered ones are steadier on working days.",
            ],
        )?;

        section(
            f,
            "6. Correlation of weather variables and rentals",
            has_daily,
            |f| {
                let matrix = &s.correlation;
                write!(f, "  {:<20}", "")?;
                for variable in &matrix.variables {
                    write!(f, " {:>8.8}", variable)?;
                }
                writeln!(f)?;
                for (variable, row) in matrix.variables.iter().zip(&matrix.cells) {
                    write!(f, "  {:<20}", variable)?;
                    for cell in row {
                        match cell {
                            Some(r) => write!(f, " {:>8.2}", r)?,
                            None => write!(f, " {:>8}", "n/a")?,
                        }
                    }
                    writeln!(f)?;
                }
                Ok(())
            },
            &[
                "Actual and feeling temperature correlate strongly and positively with total rentals.",
                "Humidity correlates weakly and wind speed moderately negatively.",
            ],
        )?;

        section(
            f,
            "7. Hourly pattern by season and day type",
            has_hourly,
            |f| {
                for point in &s.seasonal_hourly_profile {
                    writeln!(
                        f,
                        "  {:<8} {:<16} {:02}:00  {:>8.1}",
                        point.season.label(),
                        point.day_type.label(),
                        point.hour,
                        point.mean_rentals
                    )?;
                }
                Ok(())
            },
            &["The commuter and leisure patterns hold in every season, with the season changing their intensity and peak length."],
        )?;

        section(
            f,
            "8. Casual vs registered riders by season",
            has_daily,
            |f| {
                for row in &s.season_user_type_totals {
                    writeln!(
                        f,
                        "  {:<8} {:<10} {:>12}",
                        row.season.label(),
                        row.user_type.column(),
                        thousands(row.rentals)
                    )?;
                }
                Ok(())
            },
            &["Registered riders dominate in every season; casual riders grow in the warm seasons."],
        )?;

        section(
            f,
            "9. Monthly usage clusters",
            has_daily,
            |f| {
                for month in &s.monthly_usage {
                    writeln!(
                        f,
                        "  {:<8} {:>12}  {}",
                        month.month.to_string(),
                        thousands(month.total_rentals),
                        month.cluster
                    )?;
                }
                writeln!(f, "  Months per cluster:")?;
                for group in &s.cluster_months {
                    if group.months.is_empty() {
                        writeln!(f, "    {}: no months in this cluster for the selection.", group.cluster)?;
                    } else {
                        let months: Vec<String> = group.months.iter().map(|m| m.to_string()).collect();
                        writeln!(f, "    {}: {}", group.cluster, months.join(", "))?;
                    }
                }
                Ok(())
            },
            &["Grouping months into low, medium and high usage helps plan operations."],
        )?;

        writeln!(f)?;
        writeln!(f, "Conclusions")?;
        writeln!(f, "-----------")?;
        for conclusion in CONCLUSIONS {
            writeln!(f, "  - {conclusion}")?;
        }
        Ok(())
    }
}
