//! Slate-wide game flow: quarter totals and player leverage alerts.

use crate::models::{QuarterPoints, ScoredPlayer};

/// Quarter-by-quarter points summed across every scored player.
pub fn quarter_flow(players: &[ScoredPlayer]) -> QuarterPoints {
    players.iter().map(ScoredPlayer::quarters).sum()
}

pub fn mean_fantasy_points(players: &[ScoredPlayer]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    players.iter().map(|p| p.fantasy_points).sum::<f64>() / players.len() as f64
}

/// Players with `value >= threshold` whose fantasy points are below the mean.
///
/// These are cheap players that already paid off per dollar but still trail
/// the slate: the usual candidates for a late swap decision.
pub fn leverage_alerts(players: &[ScoredPlayer], threshold: f64) -> Vec<ScoredPlayer> {
    let mean = mean_fantasy_points(players);

    players
        .iter()
        .filter(|p| p.value.is_some_and(|v| v >= threshold) && p.fantasy_points < mean)
        .cloned()
        .collect()
}
