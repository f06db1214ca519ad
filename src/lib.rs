//! rPauseLogger library root.
//! Exposes the CLI parser, the break toggle core, its JSON store and the HTTP surface.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod http;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::PauseService;
use crate::db::{EmployeeDirectory, PauseStore};
use crate::errors::AppResult;
use clap::Parser;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
        Commands::Pause { .. } => cli::commands::pause::handle(&cli.command, cfg),
        Commands::History => cli::commands::history::handle(cfg),
        Commands::Active => cli::commands::active::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Wire the store, the employee directory and the policy from the configuration.
pub fn open_service(cfg: &Config) -> AppResult<PauseService> {
    let directory = EmployeeDirectory::load(&cfg.employees_path())?;
    let store = PauseStore::with_max_pending(cfg.pauses_path(), cfg.max_pending_toggles);
    Ok(PauseService::new(store, directory, cfg.policy()))
}

/// Command-line overrides are relative to the working directory, not the config dir.
fn absolute(path: &str) -> AppResult<String> {
    let p = utils::path::expand_tilde(path);
    let p = if p.is_absolute() {
        p
    } else {
        std::env::current_dir()?.join(Path::new(&p))
    };
    Ok(p.to_string_lossy().to_string())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // the server logs requests; one-shot commands only report problems
    let default_level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    if let Err(e) = utils::logging::init_tracing(default_level) {
        eprintln!("Warning: {}", e);
    }

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.pauses_file = absolute(custom_db)?;
    }
    if let Some(custom_employees) = &cli.employees {
        cfg.employees_file = absolute(custom_employees)?;
    }

    dispatch(&cli, &cfg)
}
