use chrono::{NaiveDate, Weekday};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphGraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("start date {date} is a {weekday}; the calendar grid starts on a Sunday")]
    AnchorNotSunday { date: NaiveDate, weekday: Weekday },

    #[error("commits per day must be between 1 and {max}, got {got}")]
    InvalidMultiplier { got: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, GlyphGraphError>;
