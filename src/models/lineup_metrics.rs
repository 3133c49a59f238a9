use super::lineup::LineupId;
use super::quarter::QuarterPoints;
use serde::Serialize;

/// Aggregate metrics of a real lineup at a given point of the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupMetrics {
    pub lineup_id: LineupId,
    /// Resolved player names, in roster-slot order.
    pub players: Vec<String>,
    /// References that matched no scored player.
    pub unresolved: usize,
    pub total_points: f64,
    /// Sum of the known salaries; `None` when no resolved player has one.
    pub total_salary: Option<u64>,
    pub value: Option<f64>,
    pub quarters: QuarterPoints,
    pub early: f64,
    pub late: f64,
    pub minutes_remaining: u32,
    pub swap_urgency: Option<f64>,
}

/// Aggregate metrics of a synthesized lineup (exploratory mode).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactMetrics {
    pub lineup_id: LineupId,
    pub players: Vec<String>,
    pub total_points: f64,
    pub total_salary: u64,
    pub value: Option<f64>,
    pub early: f64,
    pub late: f64,
    pub impact_score: f64,
}
