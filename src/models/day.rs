use super::line::Line;
use chrono::{NaiveDate, NaiveTime};

/// One calendar day of a week file, lines in file order (never a `DayHeader`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub lines: Vec<Line>,
}

impl Day {
    pub fn new(date: NaiveDate, lines: Vec<Line>) -> Self {
        Self { date, lines }
    }

    pub fn has_open_shift(&self) -> bool {
        self.lines.iter().any(Line::is_open_shift)
    }

    pub fn open_shift_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_open_shift()).count()
    }

    /// Returns a copy with `shift` inserted right after the last existing shift,
    /// ahead of any trailing comments, special days and blank lines.
    pub fn adding_shift(&self, shift: Line) -> Self {
        let split = self
            .lines
            .iter()
            .rposition(Line::is_shift)
            .map_or(0, |last| last + 1);

        let mut lines = Vec::with_capacity(self.lines.len() + 1);
        lines.extend_from_slice(&self.lines[..split]);
        lines.push(shift);
        lines.extend_from_slice(&self.lines[split..]);

        Self::new(self.date, lines)
    }

    /// Returns a copy where every open shift is closed at `stop_time`.
    /// Callers check `open_shift_count` first; positions are kept as they are.
    pub fn closing_shift(&self, stop_time: NaiveTime) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| match line {
                Line::OpenShift { start_time } => Line::ClosedShift {
                    start_time: *start_time,
                    stop_time,
                },
                other => other.clone(),
            })
            .collect();

        Self::new(self.date, lines)
    }

    pub fn adding_blank_line(&self) -> Self {
        let mut lines = self.lines.clone();
        lines.push(Line::Blank);
        Self::new(self.date, lines)
    }
}
