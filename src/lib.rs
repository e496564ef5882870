//! weektracker library root.
//! Exposes the week file model, serializer and tracker, plus the CLI
//! front end and its `run()` entry point.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, Context};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::process::ExitCode;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);

    match &cli.command {
        Some(Commands::Completions { shell }) => commands::completions::handle(*shell),
        Some(Commands::Init) => commands::init::handle(&config_path)?,
        Some(Commands::Config {
            print_config,
            edit_config,
            editor,
        }) => commands::config::handle(
            cfg,
            &config_path,
            *print_config,
            *edit_config,
            editor.as_deref(),
        )?,
        Some(Commands::Start) => commands::start::handle(&Context::new(cli, cfg)?)?,
        Some(Commands::Stop) => commands::stop::handle(&Context::new(cli, cfg)?)?,
        Some(Commands::Edit { editor }) => {
            commands::edit::handle(&Context::new(cli, cfg)?, cfg, editor.as_deref())?
        }
        Some(Commands::Path) => commands::path::handle(&Context::new(cli, cfg)?)?,
        Some(Commands::Report { is_working }) => {
            return commands::report::handle(&Context::new(cli, cfg)?, cfg, *is_working);
        }
        None => return commands::report::handle(&Context::new(cli, cfg)?, cfg, false),
    }
    Ok(ExitCode::SUCCESS)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = Config::load(&config_path)?;
    log::debug!("configuration loaded from {}", config_path.display());

    dispatch(&cli, &cfg)
}
