use crate::export::{ExportFormat, ExportTable};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for dfsflow
/// DFS game flow engine for DraftKings NBA slates
#[derive(Parser)]
#[command(
    name = "dfsflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "DFS game flow engine: DraftKings scoring, lineup impact and late swap alerts",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level (error, warn, info, debug, trace); RUST_LOG wins
    #[arg(global = true, long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two tables every report needs.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// DraftKings salary CSV (PLAYER or Name, Salary)
    #[arg(long, value_name = "CSV")]
    pub salaries: PathBuf,

    /// Boxscore table: CSV (PLAYER, PTS, REB, ...) or NBA live-data JSON
    #[arg(long, value_name = "FILE")]
    pub boxscore: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct LineupArgs {
    /// Lineup entries CSV; without it lineups are synthesized from the pool
    #[arg(long, value_name = "CSV")]
    pub entries: Option<PathBuf>,

    /// Current quarter of the game (1-4)
    #[arg(
        long,
        short = 'q',
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub quarter: u8,

    /// Roster-slot columns of the entries table, comma separated (overrides config)
    #[arg(long, value_name = "SLOTS")]
    pub slots: Option<String>,

    /// Seed for synthetic lineups (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the boxscore: player table, quarter flow and late swap leverage
    Score {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Lineup metrics with swap urgency (or synthetic impact view)
    Lineups {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        lineup: LineupArgs,
    },

    /// Export a report table to CSV, JSON or XLSX
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        lineup: LineupArgs,

        /// Table to export
        #[arg(long, value_enum, default_value = "players")]
        table: ExportTable,

        /// Output format (default: from the file extension)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}
