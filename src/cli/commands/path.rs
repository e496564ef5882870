use super::Context;
use crate::errors::AppResult;

pub fn handle(ctx: &Context) -> AppResult<()> {
    let path = ctx
        .repository
        .week_file_create_if_needed(ctx.selected_week_date())?;
    println!("{}", path.display());
    Ok(())
}
