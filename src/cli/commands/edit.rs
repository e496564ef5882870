use super::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::editor::open_in_editor;

/// Open the selected week file in an editor. The file is created first so
/// the editor never starts on an empty buffer.
pub fn handle(ctx: &Context, cfg: &Config, editor: Option<&str>) -> AppResult<()> {
    let path = ctx
        .repository
        .week_file_create_if_needed(ctx.selected_week_date())?;
    open_in_editor(&path, editor.or(cfg.editor.as_deref()))
}
