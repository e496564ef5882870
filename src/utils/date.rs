use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};

const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Local wall-clock time, or the pinned value when one is given (`YYYY-MM-DDTHH:MM`).
pub fn now(pinned: Option<&str>) -> AppResult<NaiveDateTime> {
    match pinned {
        Some(s) => parse_date_time(s),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

pub fn parse_date_time(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, NOW_FORMAT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// `date` moved by a whole number of weeks.
pub fn shift_weeks(date: NaiveDate, weeks: i32) -> NaiveDate {
    date + Duration::weeks(i64::from(weeks))
}
