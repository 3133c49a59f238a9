//! Shared input pipeline: load the tables once and hand them to the engine.

use crate::cli::parser::{InputArgs, LineupArgs};
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::models::ScoredPlayer;
use crate::models::report::{ImpactReport, LineupReport, PlayerReport};
use crate::sources::{RosterSlots, load_boxscore, load_entries, load_salaries};

/// Lineup view produced for one invocation.
pub enum LineupOutcome {
    /// Real entries: urgency metrics and swap-pressure flags
    Entries(LineupReport),
    /// No entries supplied: synthetic lineups ranked by impact
    Synthetic(ImpactReport),
}

pub fn player_report(input: &InputArgs, cfg: &Config) -> AppResult<PlayerReport> {
    let salaries = load_salaries(&input.salaries)?;
    let stats = load_boxscore(&input.boxscore)?;

    Ok(Core::build_player_report(stats, &salaries, cfg.value_alert_threshold))
}

pub fn lineup_outcome(
    players: &[ScoredPlayer],
    lineup: &LineupArgs,
    cfg: &Config,
) -> AppResult<LineupOutcome> {
    match &lineup.entries {
        Some(path) => {
            let slots = match &lineup.slots {
                Some(list) => RosterSlots::parse(list)?,
                None => cfg.roster_slots()?,
            };
            let entries = load_entries(path, &slots)?;
            Ok(LineupOutcome::Entries(Core::build_lineup_report(
                players,
                &entries,
                lineup.quarter,
            )))
        }
        None => {
            let seed = lineup.seed.unwrap_or(cfg.seed);
            Ok(LineupOutcome::Synthetic(Core::build_impact_report(
                players,
                &cfg.synthetic_params(),
                seed,
            )))
        }
    }
}
