use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::editor::open_in_editor;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(
    cfg: &Config,
    config_path: &Path,
    print_config: bool,
    edit_config: bool,
    editor: Option<&str>,
) -> AppResult<()> {
    // ---- PRINT CONFIG ----
    if print_config {
        print!("{}", cfg.to_yaml()?);
    }

    // ---- EDIT CONFIG ----
    if edit_config {
        if !config_path.exists() {
            warning(format!(
                "{} does not exist yet, run `weektracker init` first",
                config_path.display()
            ));
            return Ok(());
        }
        open_in_editor(config_path, editor.or(cfg.editor.as_deref()))?;
        success("Configuration file edited successfully");
    }

    Ok(())
}
