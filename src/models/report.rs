use super::lineup::LineupId;
use super::lineup_metrics::{ImpactMetrics, LineupMetrics};
use super::quarter::QuarterPoints;
use super::scored_player::ScoredPlayer;

/// Player-level game flow: scored table, quarter totals and leverage alerts.
#[derive(Debug, Default)]
pub struct PlayerReport {
    /// Sorted by fantasy points, highest first.
    pub players: Vec<ScoredPlayer>,
    pub flow: QuarterPoints,
    pub mean_points: f64,
    /// High-value players scoring below the slate mean.
    pub leverage: Vec<ScoredPlayer>,
}

/// Real-lineup report: metrics plus the batch-relative risk classification.
#[derive(Debug, Default)]
pub struct LineupReport {
    /// Sorted by swap urgency, highest first, undefined last.
    pub lineups: Vec<LineupMetrics>,
    /// 75th percentile of the defined urgencies, when the sample is large enough.
    pub cutoff: Option<f64>,
    pub flagged: Vec<LineupId>,
}

impl LineupReport {
    pub fn is_flagged(&self, id: LineupId) -> bool {
        self.flagged.contains(&id)
    }

    /// Lineups under high swap pressure, in table order.
    pub fn high_pressure(&self) -> impl Iterator<Item = &LineupMetrics> {
        self.lineups.iter().filter(|m| self.is_flagged(m.lineup_id))
    }
}

/// Synthetic-lineup report used when no entries table is supplied.
#[derive(Debug, Default)]
pub struct ImpactReport {
    /// Sorted by impact score, highest first.
    pub lineups: Vec<ImpactMetrics>,
    pub late_surge: Vec<ImpactMetrics>,
    pub fragile: Vec<ImpactMetrics>,
}
