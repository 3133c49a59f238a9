use crate::cli::commands::inputs::{LineupOutcome, lineup_outcome, player_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render::{lineups_table, print_impact_report, print_lineup_report};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lineups { input, lineup } = cmd {
        let report = player_report(input, cfg)?;

        header(format!("Lineup Impact (quarter {})", lineup.quarter));

        match lineup_outcome(&report.players, lineup, cfg)? {
            LineupOutcome::Entries(lr) => {
                if lr.lineups.is_empty() {
                    info("No lineup matched any scored player.");
                    return Ok(());
                }

                print_lineup_report(&lr);

                println!("\n🔁 Late Swap Alerts\n");
                if lr.flagged.is_empty() {
                    success("No lineup under high swap pressure");
                } else {
                    warning(format!("{} lineup(s) under high swap pressure", lr.flagged.len()));
                    print!("{}", lineups_table(lr.high_pressure(), &lr).render());
                }
            }
            LineupOutcome::Synthetic(ir) => {
                if ir.lineups.is_empty() {
                    info("Not enough players to construct lineups.");
                    return Ok(());
                }
                print_impact_report(&ir);
            }
        }
    }
    Ok(())
}
