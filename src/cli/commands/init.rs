use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (left alone if it already exists)
///  - the directory holding the week files
pub fn handle(config_path: &Path) -> AppResult<()> {
    let written = Config::init_all(config_path)?;
    let cfg = Config::load(config_path)?;

    if written {
        success(format!("Config file: {}", config_path.display()));
    } else {
        info(format!(
            "Config file already exists: {}",
            config_path.display()
        ));
    }
    success(format!("Week files:  {}", cfg.data_path().display()));
    Ok(())
}
