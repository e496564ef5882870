//! Week file reader/writer.
//!
//! ```text
//! # free-form comment
//! [monday 2020-07-06]
//! * 08:00-12:00
//! * vab 13:00-17:00
//! * vacation
//! * 18:30-
//! ```
//!
//! Parsing is all-or-nothing: the first line that fits no rule aborts it.

use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use crate::models::document::Document;
use crate::models::line::Line;
use chrono::{NaiveDate, NaiveTime};
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const TIME_FORMAT: &str = "%H:%M";

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# (?P<text>.*)$").expect("comment pattern"));

static DAY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[a-z]+\s+(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})]$")
        .expect("day header pattern")
});

static OPEN_SHIFT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\* (?P<start_hour>[0-9]{2}):(?P<start_minute>[0-9]{2})-$")
        .expect("open shift pattern")
});

static CLOSED_SHIFT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\* (?P<start_hour>[0-9]{2}):(?P<start_minute>[0-9]{2})-(?P<stop_hour>[0-9]{2}):(?P<stop_minute>[0-9]{2})$",
    )
    .expect("closed shift pattern")
});

static SPECIAL_SHIFT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\* (?P<text>[A-Za-z]+) (?P<start_hour>[0-9]{2}):(?P<start_minute>[0-9]{2})-(?P<stop_hour>[0-9]{2}):(?P<stop_minute>[0-9]{2})$",
    )
    .expect("special shift pattern")
});

static SPECIAL_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\* (?P<text>[A-Za-z]+)$").expect("special day pattern"));

static BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*$").expect("blank pattern"));

// ---------------------------
// Writing
// ---------------------------

/// Full text of a document, every line newline-terminated.
pub fn write_document(document: &Document) -> String {
    let mut out = String::new();
    write_lines(&document.preamble, &mut out);
    for day in &document.days {
        out.push_str(&write_day(day));
    }
    debug!(
        "serialized document: {} preamble lines, {} days",
        document.preamble.len(),
        document.days.len()
    );
    out
}

/// A day block: the synthesized header followed by the day's own lines.
pub fn write_day(day: &Day) -> String {
    let mut out = write_line(&Line::DayHeader { date: day.date });
    out.push('\n');
    write_lines(&day.lines, &mut out);
    out
}

fn write_lines(lines: &[Line], out: &mut String) {
    for line in lines {
        out.push_str(&write_line(line));
        out.push('\n');
    }
}

/// One line without its terminating newline.
pub fn write_line(line: &Line) -> String {
    match line {
        Line::Comment { text } => format!("# {}", text),
        Line::DayHeader { date } => format!("[{}]", header_date(*date)),
        Line::OpenShift { start_time } => format!("* {}-", format_time(*start_time)),
        Line::ClosedShift {
            start_time,
            stop_time,
        } => format!("* {}-{}", format_time(*start_time), format_time(*stop_time)),
        Line::SpecialDay { text } => format!("* {}", text),
        Line::SpecialShift {
            text,
            start_time,
            stop_time,
        } => format!(
            "* {} {}-{}",
            text,
            format_time(*start_time),
            format_time(*stop_time)
        ),
        Line::Blank => String::new(),
    }
}

/// `monday 2020-07-06`. The weekday always comes from the date itself.
fn header_date(date: NaiveDate) -> String {
    format!(
        "{} {}",
        date.format("%A").to_string().to_lowercase(),
        date.format("%Y-%m-%d")
    )
}

/// `HH:MM`; seconds and below are dropped.
fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

// ---------------------------
// Parsing
// ---------------------------

pub fn parse_document(text: &str) -> AppResult<Document> {
    let lines = text
        .lines()
        .enumerate()
        .map(|(index, raw)| {
            parse_line(raw).ok_or_else(|| AppError::Parse {
                line_number: index + 1,
                text: raw.to_string(),
            })
        })
        .collect::<AppResult<Vec<Line>>>()?;

    let document = group_days(lines);
    debug!(
        "parsed document: {} preamble lines, {} days",
        document.preamble.len(),
        document.days.len()
    );
    Ok(document)
}

/// Classifies a single line; rules are tried in a fixed order and the first match wins.
///
/// A line shaped like a rule but holding an impossible value (`* 25:00-`,
/// `[monday 2020-02-30]`) does not match that rule.
pub fn parse_line(raw: &str) -> Option<Line> {
    parse_comment(raw)
        .or_else(|| parse_day_header(raw))
        .or_else(|| parse_open_shift(raw))
        .or_else(|| parse_closed_shift(raw))
        .or_else(|| parse_special_shift(raw))
        .or_else(|| parse_special_day(raw))
        .or_else(|| parse_blank(raw))
}

/// Lines before the first header form the preamble; each header opens a new day.
fn group_days(lines: Vec<Line>) -> Document {
    let mut preamble = Vec::new();
    let mut days: Vec<Day> = Vec::new();

    for line in lines {
        if let Line::DayHeader { date } = line {
            days.push(Day::new(date, Vec::new()));
        } else if let Some(day) = days.last_mut() {
            day.lines.push(line);
        } else {
            preamble.push(line);
        }
    }

    Document::new(preamble, days)
}

fn parse_comment(raw: &str) -> Option<Line> {
    let caps = COMMENT.captures(raw)?;
    Some(Line::Comment {
        text: caps["text"].to_string(),
    })
}

fn parse_day_header(raw: &str) -> Option<Line> {
    let caps = DAY_HEADER.captures(raw)?;
    let date = NaiveDate::from_ymd_opt(
        caps["year"].parse().ok()?,
        caps["month"].parse().ok()?,
        caps["day"].parse().ok()?,
    )?;
    Some(Line::DayHeader { date })
}

fn parse_open_shift(raw: &str) -> Option<Line> {
    let caps = OPEN_SHIFT.captures(raw)?;
    Some(Line::OpenShift {
        start_time: time_from(&caps, "start_hour", "start_minute")?,
    })
}

fn parse_closed_shift(raw: &str) -> Option<Line> {
    let caps = CLOSED_SHIFT.captures(raw)?;
    Some(Line::ClosedShift {
        start_time: time_from(&caps, "start_hour", "start_minute")?,
        stop_time: time_from(&caps, "stop_hour", "stop_minute")?,
    })
}

fn parse_special_shift(raw: &str) -> Option<Line> {
    let caps = SPECIAL_SHIFT.captures(raw)?;
    Some(Line::SpecialShift {
        text: caps["text"].to_string(),
        start_time: time_from(&caps, "start_hour", "start_minute")?,
        stop_time: time_from(&caps, "stop_hour", "stop_minute")?,
    })
}

fn parse_special_day(raw: &str) -> Option<Line> {
    let caps = SPECIAL_DAY.captures(raw)?;
    Some(Line::SpecialDay {
        text: caps["text"].to_string(),
    })
}

fn parse_blank(raw: &str) -> Option<Line> {
    BLANK.is_match(raw).then_some(Line::Blank)
}

fn time_from(caps: &Captures, hour: &str, minute: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(caps[hour].parse().ok()?, caps[minute].parse().ok()?, 0)
}
