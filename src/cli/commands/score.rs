use crate::cli::commands::inputs::player_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render::{leverage_table, print_player_report};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Score { input } = cmd {
        let report = player_report(input, cfg)?;

        header("DFS Game Flow Engine (DraftKings)");

        if report.players.is_empty() {
            info("The boxscore has no players.");
            return Ok(());
        }

        print_player_report(&report);

        println!("\n🔁 Late Swap Alerts\n");
        if report.leverage.is_empty() {
            success("No late swap pressure detected");
        } else {
            warning("Late swap leverage detected");
            print!("{}", leverage_table(&report.leverage).render());
        }
    }
    Ok(())
}
