pub mod day;
pub mod document;
pub mod line;
pub mod week_report;
