pub mod completions;
pub mod config;
pub mod edit;
pub mod init;
pub mod path;
pub mod report;
pub mod start;
pub mod stop;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::tracker::TimeTracker;
use crate::errors::AppResult;
use crate::storage::repository::TrackerRepository;
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};

/// Everything a command needs, resolved once from the CLI flags and the config.
pub struct Context {
    pub now: NaiveDateTime,
    pub week_offset: Option<i32>,
    pub repository: TrackerRepository,
    pub tracker: TimeTracker,
}

impl Context {
    pub fn new(cli: &Cli, cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            now: date::now(cli.now.as_deref())?,
            week_offset: cli.week,
            repository: TrackerRepository::new(cfg.data_path())
                .with_explicit_week_file(cli.weekfile.clone()),
            tracker: TimeTracker::new(cfg.standard_work_day()),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// A date inside the week selected with `--week` (today without it).
    pub fn selected_week_date(&self) -> NaiveDate {
        match self.week_offset {
            Some(weeks) => date::shift_weeks(self.today(), weeks),
            None => self.today(),
        }
    }
}
