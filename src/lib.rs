//! sched2ics library root.
//! Exposes the CLI parser, the high-level run() function and the conversion
//! pipeline (table loading, reshaping, time-range normalization, events).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod table;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use ui::messages::warning;

pub use crate::core::{NormalizedTimeRange, Pipeline, normalize};
pub use models::{ConversionReport, EventRecord, RowOutcome, SkipReason};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, &config_path(cli))
        }
    }
}

/// Configuration file used by this invocation.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::config_file)
}

/// Load the configuration and apply the per-run overrides from the command line.
pub fn effective_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load(Some(config_path(cli).as_path()))?;

    if let Some(tz) = &cli.tz {
        cfg.time_zone = tz.clone();
    }
    if let Some(n) = cli.skip_rows {
        cfg.header_rows_to_skip = n;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Configuration for the `config` subcommand: the file as written, without
/// validation, so a broken file can still be printed, re-initialized,
/// migrated or edited. A file that cannot be parsed at all shows as defaults.
pub fn repairable_config(cli: &Cli) -> Config {
    match Config::read(&config_path(cli)) {
        Ok(cfg) => cfg,
        Err(e) => {
            warning(format!("Configuration file not readable, showing defaults: {e}"));
            Config::default()
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, with command-line overrides
    let cfg = match cli.command {
        Commands::Config { .. } => repairable_config(&cli),
        _ => effective_config(&cli)?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
