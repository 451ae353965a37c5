//! In-memory fixtures shared by the unit tests.

use crate::types::day_type::DayType;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;
use crate::types::records::{DailyRecord, HourlyRecord, RentalRow};
use crate::types::season::Season;
use crate::types::weather_condition::WeatherCondition;
use chrono::{Datelike, NaiveDate};

/// Three daily rows with labels as values and an extra column.
pub(crate) const DAILY_CSV: &str = "\
date,season,year,month,weekday,workingday,weather_condition,holiday,temperature,feeling_temperature,humidity,windspeed,casual,registered,total_rentals,extra
2011-01-01,Spring,2011,Jan,Saturday,Non-Working Day,Mist/Cloudy,Not Holiday,0.344,0.364,0.806,0.160,331,654,985,x
2011-01-02,Spring,2011,Jan,Sunday,Non-Working Day,Mist/Cloudy,Not Holiday,0.363,0.354,0.696,0.249,131,670,801,y
2011-01-03,Spring,2011,Jan,Monday,Working Day,Clear/Cloudy,Not Holiday,0.196,0.189,0.437,0.248,120,1229,1349,z
";

/// Two hourly rows encoded with numeric codes.
pub(crate) const HOURLY_CSV: &str = "\
date,hour,season,year,month,weekday,workingday,weather_condition,holiday,temperature,feeling_temperature,humidity,windspeed,casual,registered,total_rentals
2011-01-01,0,1,0,1,6,0,1,0,0.24,0.2879,0.81,0.0,3,13,16
2011-01-01,1,1,0,1,6,0,1,0,0.22,0.2727,0.80,0.0,8,32,40
";

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn row(
    date: NaiveDate,
    season: Season,
    weather: WeatherCondition,
    working_day: DayType,
    casual: i64,
    registered: i64,
) -> RentalRow {
    let temperature = 0.2 + date.month() as f64 / 24.0;
    RentalRow {
        date,
        season,
        working_day,
        weather,
        holiday: false,
        temperature,
        feeling_temperature: temperature * 0.9 + date.day() as f64 / 1000.0,
        humidity: 0.8 - date.month() as f64 / 30.0,
        windspeed: 0.1 + (date.day() % 5) as f64 / 20.0,
        casual,
        registered,
        total_rentals: casual + registered,
    }
}

/// Ten days across 2011 and 2012 covering every season and weather label.
pub(crate) fn daily_records() -> Vec<DailyRecord> {
    use DayType::{NonWorkingDay, WorkingDay};
    use Season::*;
    use WeatherCondition::*;

    let mut independence_day = row(date(2011, 7, 4), Fall, ClearCloudy, NonWorkingDay, 3065, 2978);
    independence_day.holiday = true;

    vec![
        row(date(2011, 1, 1), Spring, MistCloudy, NonWorkingDay, 331, 654),
        row(date(2011, 1, 2), Spring, MistCloudy, NonWorkingDay, 131, 670),
        row(date(2011, 1, 3), Spring, ClearCloudy, WorkingDay, 120, 1229),
        row(date(2011, 1, 4), Spring, ClearCloudy, WorkingDay, 108, 1454),
        independence_day,
        row(date(2011, 7, 5), Fall, MistCloudy, WorkingDay, 1031, 3634),
        row(date(2011, 12, 25), Winter, LightSnowRain, NonWorkingDay, 50, 400),
        row(date(2012, 4, 15), Summer, ClearCloudy, NonWorkingDay, 2500, 3500),
        row(date(2012, 4, 16), Summer, ClearCloudy, WorkingDay, 700, 4800),
        row(date(2012, 10, 29), Winter, HeavyRainFog, WorkingDay, 2, 20),
    ]
    .into_iter()
    .map(RentalRow::into_daily)
    .collect()
}

/// Eight hours on five days. Working-day means: hour 8 = 300, hour 17 = 250.
/// Non-working means: hour 8 = 20, hour 13 = 200.
pub(crate) fn hourly_records() -> Vec<HourlyRecord> {
    use DayType::{NonWorkingDay, WorkingDay};
    use Season::*;
    use WeatherCondition::*;

    let hours = [
        (date(2011, 1, 1), 8, Spring, MistCloudy, NonWorkingDay, 4, 16),
        (date(2011, 1, 1), 13, Spring, MistCloudy, NonWorkingDay, 40, 60),
        (date(2011, 1, 3), 8, Spring, ClearCloudy, WorkingDay, 10, 90),
        (date(2011, 1, 3), 17, Spring, ClearCloudy, WorkingDay, 20, 180),
        (date(2011, 1, 4), 8, Spring, ClearCloudy, WorkingDay, 5, 195),
        (date(2011, 1, 4), 17, Spring, ClearCloudy, WorkingDay, 30, 270),
        (date(2011, 7, 4), 13, Fall, ClearCloudy, NonWorkingDay, 200, 100),
        (date(2012, 4, 16), 8, Summer, ClearCloudy, WorkingDay, 30, 570),
    ];
    hours
        .into_iter()
        .map(|(day, hour, season, weather, working_day, casual, registered)| {
            row(day, season, weather, working_day, casual, registered).into_hourly(hour)
        })
        .collect()
}

pub(crate) fn daily_fixture() -> DailyFrame {
    DailyFrame::from_records(&daily_records()).unwrap()
}

pub(crate) fn hourly_fixture() -> HourlyFrame {
    HourlyFrame::from_records(&hourly_records()).unwrap()
}
