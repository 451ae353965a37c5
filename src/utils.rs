use chrono::{Duration, NaiveDate};

/// Days between 1970-01-01 and the given date, the physical representation of a polars `Date`.
pub(crate) fn days_since_epoch(date: NaiveDate) -> i32 {
    (date - unix_epoch()).num_days() as i32
}

pub(crate) fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    unix_epoch().checked_add_signed(Duration::days(days as i64))
}

fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Parses the leading `YYYY-MM-DD` of a date or datetime string.
pub(crate) fn parse_leading_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
