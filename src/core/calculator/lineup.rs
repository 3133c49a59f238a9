//! Lineup aggregation: join lineup references to scored players and derive
//! the early/late split, time remaining and swap urgency.

use crate::core::calculator::scoring;
use crate::models::{LineupEntry, LineupMetrics, QuarterPoints, ScoredPlayer};
use std::collections::HashMap;
use tracing::debug;

pub const QUARTER_MINUTES: u32 = 12;
pub const GAME_MINUTES: u32 = 48;

/// Name → scored player lookup. The first player with a given name wins.
pub struct PlayerIndex<'a> {
    by_name: HashMap<&'a str, &'a ScoredPlayer>,
}

impl<'a> PlayerIndex<'a> {
    pub fn new(players: &'a [ScoredPlayer]) -> Self {
        let mut by_name = HashMap::with_capacity(players.len());
        for p in players {
            by_name.entry(p.name()).or_insert(p);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a ScoredPlayer> {
        self.by_name.get(name).copied()
    }
}

/// Sums over the resolved players of one lineup.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupTotals {
    pub players: Vec<String>,
    pub unresolved: usize,
    pub total_points: f64,
    pub total_salary: Option<u64>,
    pub quarters: QuarterPoints,
}

/// Resolves a lineup's references by exact name and sums its players.
///
/// Unknown references are dropped; `None` when nothing resolved at all.
/// Missing salaries are skipped in the salary sum.
pub fn resolve(entry: &LineupEntry, index: &PlayerIndex<'_>) -> Option<LineupTotals> {
    let mut totals = LineupTotals {
        players: Vec::with_capacity(entry.players.len()),
        unresolved: 0,
        total_points: 0.0,
        total_salary: None,
        quarters: QuarterPoints::default(),
    };

    for name in &entry.players {
        let Some(p) = index.get(name) else {
            totals.unresolved += 1;
            continue;
        };

        totals.players.push(p.name().to_string());
        totals.total_points += p.fantasy_points;
        totals.quarters += p.quarters();
        if let Some(s) = p.salary {
            *totals.total_salary.get_or_insert(0) += u64::from(s);
        }
    }

    if totals.players.is_empty() {
        debug!(lineup = %entry.id, "no player resolved, lineup excluded");
        return None;
    }

    Some(totals)
}

/// Linear estimate of game minutes left: 12 per quarter still to start.
/// Quarters past the 4th clamp to 0.
pub fn minutes_remaining(current_quarter: u8) -> u32 {
    4u32.saturating_sub(u32::from(current_quarter)) * QUARTER_MINUTES
}

/// `(late / max(points, 1)) * (minutes / 48) * (points / max(salary / 1000, 1))`
///
/// The `max(_, 1)` floors keep tiny totals from blowing up the ratio; they
/// slightly underrate very low-scoring lineups. `None` when the lineup has
/// no known salary.
pub fn swap_urgency(
    late: f64,
    total_points: f64,
    minutes_remaining: u32,
    total_salary: Option<u64>,
) -> Option<f64> {
    let salary_k = total_salary? as f64 / 1000.0;

    let late_share = late / total_points.max(1.0);
    let time_left = f64::from(minutes_remaining) / f64::from(GAME_MINUTES);
    let efficiency = total_points / salary_k.max(1.0);

    Some(late_share * time_left * efficiency)
}

pub fn lineup_metrics(
    entry: &LineupEntry,
    index: &PlayerIndex<'_>,
    current_quarter: u8,
) -> Option<LineupMetrics> {
    let totals = resolve(entry, index)?;

    let early = totals.quarters.early();
    let late = totals.quarters.late();
    let minutes = minutes_remaining(current_quarter);

    Some(LineupMetrics {
        lineup_id: entry.id,
        unresolved: totals.unresolved,
        total_points: totals.total_points,
        total_salary: totals.total_salary,
        value: scoring::value(totals.total_points, totals.total_salary),
        quarters: totals.quarters,
        early,
        late,
        minutes_remaining: minutes,
        swap_urgency: swap_urgency(late, totals.total_points, minutes, totals.total_salary),
        players: totals.players,
    })
}

/// Metrics for every lineup with at least one resolved player, in entry order.
pub fn aggregate_lineups(
    players: &[ScoredPlayer],
    entries: &[LineupEntry],
    current_quarter: u8,
) -> Vec<LineupMetrics> {
    let index = PlayerIndex::new(players);

    entries
        .iter()
        .filter_map(|e| lineup_metrics(e, &index, current_quarter))
        .collect()
}
