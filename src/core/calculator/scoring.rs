//! DraftKings NBA classic scoring.

use crate::core::calculator::finite;
use crate::models::{PlayerStatLine, SalaryBook, ScoredPlayer};

pub const REBOUND_WEIGHT: f64 = 1.25;
pub const ASSIST_WEIGHT: f64 = 1.5;
pub const STEAL_WEIGHT: f64 = 2.0;
pub const BLOCK_WEIGHT: f64 = 2.0;
pub const THREE_POINTER_WEIGHT: f64 = 0.5;
pub const TURNOVER_PENALTY: f64 = 0.5;

/// Fantasy points for one stat line. Negative totals are kept as they are.
pub fn fantasy_points(line: &PlayerStatLine) -> f64 {
    line.points
        + line.rebounds * REBOUND_WEIGHT
        + line.assists * ASSIST_WEIGHT
        + line.steals * STEAL_WEIGHT
        + line.blocks * BLOCK_WEIGHT
        + line.three_pointers_made * THREE_POINTER_WEIGHT
        - line.turnovers * TURNOVER_PENALTY
}

/// Fantasy points per $1000 of salary.
///
/// Returns `None` for a missing or zero salary instead of an infinite ratio.
pub fn value(fantasy_points: f64, salary: Option<u64>) -> Option<f64> {
    match salary {
        Some(s) if s > 0 => finite(fantasy_points / (s as f64 / 1000.0)),
        _ => None,
    }
}

pub fn score_player(line: PlayerStatLine, salary: Option<u32>) -> ScoredPlayer {
    let fantasy_points = fantasy_points(&line);
    ScoredPlayer {
        value: value(fantasy_points, salary.map(u64::from)),
        salary,
        fantasy_points,
        stats: line,
    }
}

/// Left join of the boxscore onto the salary table.
///
/// Every stat line produces exactly one scored player, in input order;
/// players without a salary keep an undefined salary and value.
pub fn score_players(lines: Vec<PlayerStatLine>, salaries: &SalaryBook) -> Vec<ScoredPlayer> {
    lines
        .into_iter()
        .map(|line| {
            let salary = salaries.salary_of(&line.player_name);
            score_player(line, salary)
        })
        .collect()
}
