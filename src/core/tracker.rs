//! Shift state machine and duration arithmetic over week documents.
//!
//! Every operation is a pure function of its inputs: the document passed in is
//! never modified and mutations hand back a new one for the caller to persist.

use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use crate::models::document::Document;
use crate::models::line::Line;
use crate::models::week_report::WeekReport;
use chrono::{Duration, NaiveDate, NaiveTime};
use log::debug;

pub const DEFAULT_STANDARD_WORK_DAY_MINUTES: i64 = 8 * 60;

pub struct TimeTracker {
    standard_work_day: Duration,
}

impl Default for TimeTracker {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_STANDARD_WORK_DAY_MINUTES))
    }
}

impl TimeTracker {
    /// `standard_work_day` is what a special day (vacation, sick leave…) counts for.
    pub fn new(standard_work_day: Duration) -> Self {
        Self { standard_work_day }
    }

    // ---------------------------
    // Reporting
    // ---------------------------

    pub fn week_report(
        &self,
        document: &Document,
        date: NaiveDate,
        current_time: NaiveTime,
    ) -> WeekReport {
        WeekReport {
            duration_today: document
                .day(date)
                .map(|day| self.duration_for_day(day, current_time))
                .unwrap_or_else(Duration::zero),
            duration_this_week: self.duration_for_document(document, current_time),
            is_ongoing: document.has_open_shift(),
        }
    }

    pub fn duration_for_document(&self, document: &Document, current_time: NaiveTime) -> Duration {
        document
            .days
            .iter()
            .fold(Duration::zero(), |acc, day| {
                acc + self.duration_for_day(day, current_time)
            })
    }

    pub fn duration_for_day(&self, day: &Day, current_time: NaiveTime) -> Duration {
        day.lines.iter().fold(Duration::zero(), |acc, line| {
            acc + self.duration_for_line(line, current_time)
        })
    }

    /// An open shift runs until `current_time`. It is not clamped, so a start
    /// time later than `current_time` yields a negative duration.
    pub fn duration_for_line(&self, line: &Line, current_time: NaiveTime) -> Duration {
        match line {
            Line::Comment { .. } | Line::DayHeader { .. } | Line::Blank => Duration::zero(),
            Line::OpenShift { start_time } => current_time - *start_time,
            Line::ClosedShift {
                start_time,
                stop_time,
            } => *stop_time - *start_time,
            Line::SpecialDay { .. } => self.standard_work_day,
            Line::SpecialShift {
                start_time,
                stop_time,
                ..
            } => *stop_time - *start_time,
        }
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Opens a shift at `time` on `date`.
    ///
    /// Only one shift may be open in the whole document, whatever its day.
    /// An existing day gets the shift after its last shift line; a missing day
    /// is inserted in date order, and the day right before it gets a trailing
    /// blank line as separator.
    pub fn start_tracking(
        &self,
        document: &Document,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<Document> {
        if let Some(open) = document.day_with_open_shift() {
            return Err(AppError::AlreadyHasOpenShift(open.date));
        }

        let shift = Line::OpenShift { start_time: time };

        if let Some(index) = document.day_position(date) {
            debug!("adding open shift at {} to existing day {}", time, date);
            let day = document.days[index].adding_shift(shift);
            return Ok(document.replacing_day_at(index, day));
        }

        debug!("inserting new day {} with open shift at {}", date, time);
        let insert_at = document
            .days
            .iter()
            .take_while(|day| day.date < date)
            .count();

        let mut days = document.days.clone();
        if let Some(previous) = insert_at.checked_sub(1) {
            days[previous] = days[previous].adding_blank_line();
        }
        days.insert(insert_at, Day::new(date, vec![shift]));

        Ok(Document::new(document.preamble.clone(), days))
    }

    /// Closes the single open shift of `date` at `time`, in place.
    pub fn stop_tracking(
        &self,
        document: &Document,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<Document> {
        let index = document
            .day_position(date)
            .ok_or(AppError::NoOpenShiftOnThatDay(date))?;
        let day = &document.days[index];

        match day.open_shift_count() {
            0 => Err(AppError::NoOpenShiftOnThatDay(date)),
            1 => {
                debug!("closing open shift on {} at {}", date, time);
                Ok(document.replacing_day_at(index, day.closing_shift(time)))
            }
            _ => Err(AppError::MultipleOpenShiftsInOneDay(date)),
        }
    }
}
