//! Unified application error type.
//! The core (serializer, tracker) and the outer layers (storage, cli) all
//! return AppError so every failure reaches `main` as a distinct variant.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Week file {}: {source}", .path.display())]
    WeekFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Week file format
    // ---------------------------
    #[error("Couldn't parse line {line_number}:\n{text}")]
    Parse { line_number: usize, text: String },

    // ---------------------------
    // Tracking state
    // ---------------------------
    #[error("There is already an open shift (on {0})")]
    AlreadyHasOpenShift(NaiveDate),

    #[error("No open shift on {0}")]
    NoOpenShiftOnThatDay(NaiveDate),

    #[error("More than one open shift on {0}, edit the week file to resolve it")]
    MultipleOpenShiftsInOneDay(NaiveDate),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // External processes
    // ---------------------------
    #[error("Editor error: {0}")]
    Editor(String),
}

impl AppError {
    pub fn week_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::WeekFile {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
