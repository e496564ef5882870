use super::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::formatting::format_duration;
use chrono::Weekday;
use std::process::ExitCode;

pub fn handle(ctx: &Context, cfg: &Config, is_working: bool) -> AppResult<ExitCode> {
    let path = ctx
        .repository
        .week_file_create_if_needed(ctx.selected_week_date())?;
    let document = ctx.repository.read_document(&path)?;
    let report = ctx
        .tracker
        .week_report(&document, ctx.today(), ctx.now.time());

    if is_working {
        return Ok(if report.is_ongoing {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // another week than the current one is owed in full
    let as_of = match ctx.week_offset {
        Some(weeks) if weeks != 0 => ctx.selected_week_date().week(Weekday::Mon).last_day(),
        _ => ctx.today(),
    };

    let ongoing = if report.is_ongoing { ", ongoing" } else { "" };
    println!(
        "You have worked {} today{}.",
        format_duration(report.duration_today),
        ongoing
    );
    println!(
        "You have worked {} this week.",
        format_duration(report.duration_this_week)
    );
    println!(
        "Balance: {}",
        format_duration(report.balance(cfg.weekly_target(), as_of))
    );
    Ok(ExitCode::SUCCESS)
}
