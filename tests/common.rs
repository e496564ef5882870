#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn wtr() -> Command {
    cargo_bin_cmd!("weektracker")
}

pub fn naive_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn naive_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// A throwaway config file and data dir, so tests never see the user's files.
pub struct Sandbox {
    pub dir: TempDir,
    pub config: PathBuf,
    pub data_dir: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// `extra` is appended to the generated YAML (e.g. `workweek_hours: 30`).
    pub fn with_config(extra: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("weektracker.yaml");
        let data_dir = dir.path().join("week-files");
        fs::write(
            &config,
            format!("data_dir: {}\n{}\n", data_dir.display(), extra),
        )
        .unwrap();
        Sandbox {
            dir,
            config,
            data_dir,
        }
    }

    /// The binary with `--config` pointing into the sandbox and the clock pinned.
    pub fn cmd(&self, now: &str) -> Command {
        let mut cmd = wtr();
        cmd.arg("--config")
            .arg(&self.config)
            .arg("--now")
            .arg(now)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn week_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn write_week_file(&self, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(&self.data_dir).unwrap();
        let path = self.week_file(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}
