use super::Context;
use crate::core::serializer::write_day;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Open a shift now in today's week file, creating the file if needed.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let date = ctx.today();
    let time = ctx.now.time();

    let path = ctx.repository.week_file_create_if_needed(date)?;
    let document = ctx.repository.read_document(&path)?;
    let document = ctx.tracker.start_tracking(&document, date, time)?;
    ctx.repository.write_document(&path, &document)?;

    if let Some(day) = document.day(date) {
        print!("{}", write_day(day));
    }
    success(format!("Started tracking at {}", time.format("%H:%M")));
    Ok(())
}
