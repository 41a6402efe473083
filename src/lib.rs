//! rAttendance library root.
//! Exposes the attendance ledger, its storage backends, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Utc};
use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::time::parse_instant;

pub use crate::core::ledger::Ledger;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Status { sync } => commands::status::handle(*sync, cfg, now),
        Commands::In => commands::check_in::handle(cfg, now),
        Commands::Out => commands::check_out::handle(cfg, now),
        Commands::Break { kind } => commands::break_start::handle(*kind, cfg, now),
        Commands::Resume => commands::break_end::handle(cfg, now),
        Commands::Today => commands::today::handle(cfg, now),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, now),
        Commands::Stats { days } => commands::stats::handle(*days, cfg, now),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, now),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let now = match &cli.at {
        Some(at) => parse_instant(at)?,
        None => Utc::now(),
    };

    dispatch(&cli, &cfg, now)
}
