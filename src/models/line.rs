//! One line of a week file.

use chrono::{NaiveDate, NaiveTime};

/// Every kind of line the week file grammar knows about.
///
/// `DayHeader` only exists between scanning and grouping: once a document is
/// grouped into days the header becomes `Day::date` and is regenerated on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Comment {
        text: String,
    },
    DayHeader {
        date: NaiveDate,
    },
    OpenShift {
        start_time: NaiveTime,
    },
    ClosedShift {
        start_time: NaiveTime,
        stop_time: NaiveTime,
    },
    SpecialDay {
        text: String,
    },
    SpecialShift {
        text: String,
        start_time: NaiveTime,
        stop_time: NaiveTime,
    },
    Blank,
}

impl Line {
    pub fn is_shift(&self) -> bool {
        match self {
            Line::OpenShift { .. } | Line::ClosedShift { .. } | Line::SpecialShift { .. } => true,
            Line::Comment { .. } | Line::DayHeader { .. } | Line::SpecialDay { .. } | Line::Blank => {
                false
            }
        }
    }

    pub fn is_open_shift(&self) -> bool {
        matches!(self, Line::OpenShift { .. })
    }

    pub fn comment(text: &str) -> Self {
        Line::Comment {
            text: text.to_string(),
        }
    }

    pub fn special_day(text: &str) -> Self {
        Line::SpecialDay {
            text: text.to_string(),
        }
    }
}
