use super::day::Day;
use super::line::Line;
use chrono::NaiveDate;

/// A parsed week file: free-form preamble followed by days in ascending date order.
///
/// Documents are values. Every tracker operation returns a new `Document`
/// instead of touching the one it was given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub preamble: Vec<Line>,
    pub days: Vec<Day>,
}

impl Document {
    pub fn new(preamble: Vec<Line>, days: Vec<Day>) -> Self {
        Self { preamble, days }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True if any day holds an open shift. Preamble lines are not days and never count.
    pub fn has_open_shift(&self) -> bool {
        self.days.iter().any(Day::has_open_shift)
    }

    /// The first day holding an open shift, if any.
    pub fn day_with_open_shift(&self) -> Option<&Day> {
        self.days.iter().find(|day| day.has_open_shift())
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|day| day.date == date)
    }

    pub fn day_position(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.date == date)
    }

    /// Returns a copy with the day at `index` swapped for `day`.
    pub fn replacing_day_at(&self, index: usize, day: Day) -> Self {
        let mut days = self.days.clone();
        days[index] = day;
        Self::new(self.preamble.clone(), days)
    }
}
