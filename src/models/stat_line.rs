use super::quarter::QuarterPoints;
use serde::Serialize;

/// One boxscore row: a player's counting stats for a single game.
///
/// Every numeric field is already defaulted to 0 by the loaders, so the
/// scoring code never has to deal with absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStatLine {
    pub player_name: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub three_pointers_made: f64,
    pub quarters: QuarterPoints,
}

impl PlayerStatLine {
    /// Stat line with every counter at zero.
    pub fn empty(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Default::default()
        }
    }
}
