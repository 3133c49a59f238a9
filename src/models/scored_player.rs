use super::quarter::QuarterPoints;
use super::stat_line::PlayerStatLine;
use serde::Serialize;

/// A boxscore row joined with its salary, plus the derived DK metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPlayer {
    pub stats: PlayerStatLine,
    pub salary: Option<u32>,
    pub fantasy_points: f64,
    /// Fantasy points per $1000 of salary; `None` when salary is zero or missing.
    pub value: Option<f64>,
}

impl ScoredPlayer {
    pub fn name(&self) -> &str {
        &self.stats.player_name
    }

    pub fn quarters(&self) -> QuarterPoints {
        self.stats.quarters
    }
}
