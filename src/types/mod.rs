pub mod calendar;
pub mod day_type;
pub mod filter_criteria;
pub mod frames;
pub mod records;
pub mod season;
pub mod traits;
pub mod usage;
pub mod weather_condition;
