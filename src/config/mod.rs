use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "weektracker";
const CONFIG_FILE: &str = "weektracker.yaml";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_standard_work_day_minutes")]
    pub standard_work_day_minutes: i64,
    #[serde(default = "default_workweek_hours")]
    pub workweek_hours: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("week-files")
        .to_string_lossy()
        .to_string()
}
fn default_standard_work_day_minutes() -> i64 {
    crate::core::tracker::DEFAULT_STANDARD_WORK_DAY_MINUTES
}
fn default_workweek_hours() -> i64 {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            standard_work_day_minutes: default_standard_work_day_minutes(),
            workweek_hours: default_workweek_hours(),
            editor: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration to `path` and create the data directory.
    /// An existing file is left untouched; returns whether a file was written.
    pub fn init_all(path: &Path) -> AppResult<bool> {
        let cfg = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        fs::create_dir_all(cfg.data_path())?;

        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(cfg.to_yaml()?.as_bytes())?;
        Ok(true)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn standard_work_day(&self) -> Duration {
        Duration::minutes(self.standard_work_day_minutes)
    }

    pub fn weekly_target(&self) -> Duration {
        Duration::hours(self.workweek_hours)
    }
}
