//! Launch an interactive editor on a file and wait for it to exit.

use crate::errors::{AppError, AppResult};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Editor to use: the explicit choice, then `$VISUAL`, then `$EDITOR`,
/// then a platform default.
pub fn resolve_editor(requested: Option<&str>) -> String {
    requested
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

pub fn open_in_editor(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let editor = resolve_editor(requested);
    debug!("opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| AppError::Editor(format!("could not start '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(AppError::Editor(format!("'{}' exited with {}", editor, status)));
    }
    Ok(())
}
