//! Calendar anchor resolution and commit scheduling.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{GlyphGraphError, Result};

/// Accepted format for explicit start dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The anchor defaults to at least this many days before today.
pub const LOOKBACK_DAYS: u64 = 365;

pub const MAX_COMMITS_PER_DAY: u32 = 1000;

const SECONDS_PER_DAY: u64 = 86_400;

/// What to do with an explicit start date that is not a Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// Reject it with [`GlyphGraphError::AnchorNotSunday`].
    #[default]
    Strict,
    /// Move it back to the preceding Sunday.
    SnapToSunday,
}

/// The Sunday on or before `date`; `None` before the start of the calendar.
pub fn previous_sunday(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

/// Most recent Sunday at least [`LOOKBACK_DAYS`] before `today`.
pub fn default_anchor(today: NaiveDate) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(LOOKBACK_DAYS))
        .and_then(previous_sunday)
        .ok_or_else(|| {
            GlyphGraphError::InvalidInput(format!("no Sunday a year before {today}"))
        })
}

pub fn parse_anchor(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
        GlyphGraphError::InvalidInput(format!("start date '{text}' is not YYYY-MM-DD ({e})"))
    })
}

/// Pick the grid's column 0, row 0 date.
pub fn resolve_anchor(
    explicit: Option<&str>,
    today: NaiveDate,
    policy: AnchorPolicy,
) -> Result<NaiveDate> {
    let Some(text) = explicit else {
        return default_anchor(today);
    };
    let date = parse_anchor(text)?;
    match (date.weekday(), policy) {
        (Weekday::Sun, _) => Ok(date),
        (_, AnchorPolicy::SnapToSunday) => previous_sunday(date).ok_or_else(|| {
            GlyphGraphError::InvalidInput(format!("no Sunday on or before {date}"))
        }),
        (weekday, AnchorPolicy::Strict) => {
            Err(GlyphGraphError::AnchorNotSunday { date, weekday })
        }
    }
}

pub fn validate_commits_per_day(per_day: u32) -> Result<u32> {
    if (1..=MAX_COMMITS_PER_DAY).contains(&per_day) {
        Ok(per_day)
    } else {
        Err(GlyphGraphError::InvalidMultiplier {
            got: per_day,
            max: MAX_COMMITS_PER_DAY,
        })
    }
}

/// Expand each date into `per_day` timestamps on that same day.
///
/// Slot `k` sits at the middle of the k-th of `per_day` equal slices of the
/// day, so a single commit lands at noon.
pub fn schedule(dates: &[NaiveDate], per_day: u32) -> Result<Vec<NaiveDateTime>> {
    let per_day = validate_commits_per_day(per_day)?;
    let slots: Vec<NaiveTime> = (0..u64::from(per_day))
        .filter_map(|k| {
            let secs = (2 * k + 1) * SECONDS_PER_DAY / (2 * u64::from(per_day));
            NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)
        })
        .collect();

    Ok(dates
        .iter()
        .flat_map(|date| slots.iter().map(move |time| date.and_time(*time)))
        .collect())
}
