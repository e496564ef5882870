//! Seed document for a week that has no file yet.

use crate::models::day::Day;
use crate::models::document::Document;
use crate::models::line::Line;
use chrono::{Datelike, NaiveDate, Weekday};

const WORKDAYS_PER_WEEK: usize = 5;

/// Monday to Friday of the ISO week containing `date`, one blank line each.
pub fn default_document(date: NaiveDate) -> Document {
    let monday = date.week(Weekday::Mon).first_day();
    let days = monday
        .iter_days()
        .take(WORKDAYS_PER_WEEK)
        .map(|day| Day::new(day, vec![Line::Blank]))
        .collect();

    Document::new(Vec::new(), days)
}

/// `2020-W28.txt`: ISO week-based year and two-digit ISO week number.
pub fn week_file_name(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}.txt", week.year(), week.week())
}
