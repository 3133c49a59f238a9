//! dfsflow library root.
//! Exposes the CLI parser, the high-level run() function and the scoring engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Score { .. } => cli::commands::score::handle(&cli.command, cfg),
        Commands::Lineups { .. } => cli::commands::lineups::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (per `config --init` bastano i default)
    let cfg = match &cli.command {
        Commands::Config { init: true, .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    // 3️⃣ logging: --log-level wins over the config file
    logging::init_logging(cli.log_level.as_deref().unwrap_or(&cfg.log_level));

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
