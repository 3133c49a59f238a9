use crate::cli::commands::inputs::{LineupOutcome, lineup_outcome, player_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportData, ExportFormat, ExportLogic, ExportTable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        lineup,
        table,
        format,
        file,
        force,
    } = cmd
    {
        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_path(file)?,
        };

        let report = player_report(input, cfg)?;

        let data = match *table {
            ExportTable::Players => ExportData::player_report(&report),
            ExportTable::Leverage => ExportData::leverage(&report),
            ExportTable::Flow => ExportData::flow(&report.flow),
            ExportTable::Lineups | ExportTable::Alerts => {
                match (lineup_outcome(&report.players, lineup, cfg)?, *table) {
                    (LineupOutcome::Entries(lr), ExportTable::Lineups) => ExportData::lineups(&lr),
                    (LineupOutcome::Entries(lr), _) => ExportData::high_pressure(&lr),
                    (LineupOutcome::Synthetic(ir), ExportTable::Lineups) => ExportData::impact(&ir),
                    (LineupOutcome::Synthetic(ir), _) => ExportData::impact_alerts(&ir),
                }
            }
        };

        ExportLogic::export(&data, format, file, *force)?;
    }
    Ok(())
}
