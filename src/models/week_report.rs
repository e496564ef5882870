use chrono::{Datelike, Duration, NaiveDate};

/// Workdays in a week; the weekly target is spread evenly over Monday to Friday.
pub const WORKDAYS_PER_WEEK: i32 = 5;

/// Tracked time for one date and for the whole week file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    pub duration_today: Duration,
    pub duration_this_week: Duration,
    pub is_ongoing: bool,
}

impl WeekReport {
    /// Tracked time this week minus the share of `weekly_target` due by the end of `as_of`.
    /// Negative while behind.
    pub fn balance(&self, weekly_target: Duration, as_of: NaiveDate) -> Duration {
        self.duration_this_week - expected_by(weekly_target, as_of)
    }
}

/// Share of `weekly_target` for the workdays up to and including `as_of`.
/// Saturday and Sunday owe the full week.
pub fn expected_by(weekly_target: Duration, as_of: NaiveDate) -> Duration {
    let elapsed = (as_of.weekday().num_days_from_monday() as i32 + 1).min(WORKDAYS_PER_WEEK);
    weekly_target * elapsed / WORKDAYS_PER_WEEK
}
