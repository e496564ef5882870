use super::Context;
use crate::core::serializer::write_day;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Close today's open shift. Never creates a week file.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let date = ctx.today();
    let time = ctx.now.time();

    let path = ctx.repository.week_file(date);
    let document = ctx
        .repository
        .read_document_if_exists(&path)?
        .ok_or(AppError::NoOpenShiftOnThatDay(date))?;
    let document = ctx.tracker.stop_tracking(&document, date, time)?;
    ctx.repository.write_document(&path, &document)?;

    if let Some(day) = document.day(date) {
        print!("{}", write_day(day));
    }
    success(format!("Stopped tracking at {}", time.format("%H:%M")));
    Ok(())
}
