//! Exploratory mode: synthesize lineups from the player pool and rank them
//! by how much of their scoring came late.

use crate::core::calculator::lineup::{PlayerIndex, resolve};
use crate::core::calculator::scoring;
use crate::models::{ImpactMetrics, LineupEntry, ScoredPlayer};
use rand::Rng;
use rand::seq::index;
use std::cmp::Ordering;

/// Knobs of the lineup synthesizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticParams {
    pub lineups: usize,
    pub lineup_size: usize,
    /// Players must be priced strictly above this floor.
    pub min_salary: u32,
    pub top_n: usize,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            lineups: 50,
            lineup_size: 8,
            min_salary: 3000,
            top_n: 5,
        }
    }
}

/// `(late - early) / max(points, 1)`
pub fn impact_score(early: f64, late: f64, total_points: f64) -> f64 {
    (late - early) / total_points.max(1.0)
}

/// Players eligible for synthetic lineups, in table order.
pub fn player_pool(players: &[ScoredPlayer], min_salary: u32) -> Vec<&ScoredPlayer> {
    players
        .iter()
        .filter(|p| p.salary.is_some_and(|s| s > min_salary))
        .collect()
}

/// Samples `params.lineups` lineups of distinct players from the pool.
///
/// The draw depends only on the pool order and on `rng`, so a seeded
/// generator reproduces the same lineups. Returns nothing when the pool is
/// smaller than a lineup.
pub fn synthesize_lineups<R: Rng + ?Sized>(
    players: &[ScoredPlayer],
    params: &SyntheticParams,
    rng: &mut R,
) -> Vec<LineupEntry> {
    let pool = player_pool(players, params.min_salary);

    if params.lineup_size == 0 || pool.len() < params.lineup_size {
        return Vec::new();
    }

    (1..=params.lineups)
        .map(|i| {
            let picks = index::sample(rng, pool.len(), params.lineup_size);
            let names = picks.iter().map(|k| pool[k].name().to_string()).collect();
            LineupEntry::new(i as u32, names)
        })
        .collect()
}

pub fn impact_metrics(players: &[ScoredPlayer], entries: &[LineupEntry]) -> Vec<ImpactMetrics> {
    let index = PlayerIndex::new(players);

    entries
        .iter()
        .filter_map(|entry| {
            let totals = resolve(entry, &index)?;
            let early = totals.quarters.early();
            let late = totals.quarters.late();
            let salary = totals.total_salary.unwrap_or(0);

            Some(ImpactMetrics {
                lineup_id: entry.id,
                total_points: totals.total_points,
                total_salary: salary,
                value: scoring::value(totals.total_points, Some(salary)),
                early,
                late,
                impact_score: impact_score(early, late, totals.total_points),
                players: totals.players,
            })
        })
        .collect()
}

fn by_impact_desc(a: &ImpactMetrics, b: &ImpactMetrics) -> Ordering {
    b.impact_score
        .total_cmp(&a.impact_score)
        .then(a.lineup_id.cmp(&b.lineup_id))
}

fn by_impact_asc(a: &ImpactMetrics, b: &ImpactMetrics) -> Ordering {
    a.impact_score
        .total_cmp(&b.impact_score)
        .then(a.lineup_id.cmp(&b.lineup_id))
}

/// Sorts by impact (highest first) and splits out the late-surge (top
/// `top_n`) and fragile (bottom `top_n`, lowest first) lineups.
pub fn rank_impact(
    mut lineups: Vec<ImpactMetrics>,
    top_n: usize,
) -> (Vec<ImpactMetrics>, Vec<ImpactMetrics>, Vec<ImpactMetrics>) {
    lineups.sort_by(by_impact_desc);

    let late_surge = lineups.iter().take(top_n).cloned().collect();

    let mut fragile: Vec<ImpactMetrics> = lineups.clone();
    fragile.sort_by(by_impact_asc);
    fragile.truncate(top_n);

    (lineups, late_surge, fragile)
}
