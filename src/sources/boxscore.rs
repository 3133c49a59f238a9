//! Boxscore loaders: a flat CSV (`PLAYER, PTS, REB, ...`) or the NBA
//! live-data JSON document saved to disk.

use crate::errors::AppResult;
use crate::models::{PlayerStatLine, QuarterPoints};
use crate::sources::{open_csv, require_column};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Picks the format from the file extension (`.json` or CSV).
pub fn load_boxscore(path: &Path) -> AppResult<Vec<PlayerStatLine>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let lines = if is_json {
        load_boxscore_json(path)?
    } else {
        load_boxscore_csv(path)?
    };

    debug!(players = lines.len(), file = %path.display(), "boxscore loaded");
    Ok(lines)
}

// ---------------------------
// CSV
// ---------------------------

#[derive(Debug, Deserialize)]
struct BoxscoreRow {
    #[serde(rename = "PLAYER")]
    player: String,
    #[serde(rename = "PTS", default, deserialize_with = "csv::invalid_option")]
    points: Option<f64>,
    #[serde(rename = "REB", default, deserialize_with = "csv::invalid_option")]
    rebounds: Option<f64>,
    #[serde(rename = "AST", default, deserialize_with = "csv::invalid_option")]
    assists: Option<f64>,
    #[serde(rename = "STL", default, deserialize_with = "csv::invalid_option")]
    steals: Option<f64>,
    #[serde(rename = "BLK", default, deserialize_with = "csv::invalid_option")]
    blocks: Option<f64>,
    #[serde(rename = "TOV", default, deserialize_with = "csv::invalid_option")]
    turnovers: Option<f64>,
    #[serde(rename = "3PM", default, deserialize_with = "csv::invalid_option")]
    three_pointers_made: Option<f64>,
    #[serde(rename = "Q1", default, deserialize_with = "csv::invalid_option")]
    q1: Option<f64>,
    #[serde(rename = "Q2", default, deserialize_with = "csv::invalid_option")]
    q2: Option<f64>,
    #[serde(rename = "Q3", default, deserialize_with = "csv::invalid_option")]
    q3: Option<f64>,
    #[serde(rename = "Q4", default, deserialize_with = "csv::invalid_option")]
    q4: Option<f64>,
}

impl From<BoxscoreRow> for PlayerStatLine {
    fn from(r: BoxscoreRow) -> Self {
        let z = |v: Option<f64>| v.unwrap_or(0.0);
        PlayerStatLine {
            player_name: r.player,
            points: z(r.points),
            rebounds: z(r.rebounds),
            assists: z(r.assists),
            steals: z(r.steals),
            blocks: z(r.blocks),
            turnovers: z(r.turnovers),
            three_pointers_made: z(r.three_pointers_made),
            quarters: QuarterPoints::new(z(r.q1), z(r.q2), z(r.q3), z(r.q4)),
        }
    }
}

fn load_boxscore_csv(path: &Path) -> AppResult<Vec<PlayerStatLine>> {
    let mut rdr = open_csv(path)?;

    let headers = rdr.headers()?.clone();
    require_column(&headers, &["PLAYER"], path)?;

    let mut lines = Vec::new();
    for (i, row) in rdr.deserialize::<BoxscoreRow>().enumerate() {
        match row {
            Ok(r) => lines.push(PlayerStatLine::from(r)),
            Err(e) => warn!(row = i + 1, error = %e, "boxscore row skipped"),
        }
    }
    Ok(lines)
}

// ---------------------------
// NBA live-data JSON
// ---------------------------

#[derive(Debug, Deserialize)]
struct LiveBoxscore {
    game: LiveGame,
}

#[derive(Debug, Deserialize)]
struct LiveGame {
    #[serde(default)]
    players: Vec<LivePlayer>,
}

#[derive(Debug, Deserialize)]
struct LivePlayer {
    name: LiveName,
    #[serde(default)]
    statistics: LiveStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LiveName {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LiveStatistics {
    points: f64,
    rebounds_total: f64,
    assists: f64,
    steals: f64,
    blocks: f64,
    turnovers: f64,
    three_pointers_made: f64,
    #[serde(rename = "pointsQ1")]
    points_q1: f64,
    #[serde(rename = "pointsQ2")]
    points_q2: f64,
    #[serde(rename = "pointsQ3")]
    points_q3: f64,
    #[serde(rename = "pointsQ4")]
    points_q4: f64,
}

impl From<LivePlayer> for PlayerStatLine {
    fn from(p: LivePlayer) -> Self {
        let s = p.statistics;
        PlayerStatLine {
            player_name: format!("{} {}", p.name.first_name, p.name.last_name)
                .trim()
                .to_string(),
            points: s.points,
            rebounds: s.rebounds_total,
            assists: s.assists,
            steals: s.steals,
            blocks: s.blocks,
            turnovers: s.turnovers,
            three_pointers_made: s.three_pointers_made,
            quarters: QuarterPoints::new(s.points_q1, s.points_q2, s.points_q3, s.points_q4),
        }
    }
}

/// Parses a live-data boxscore document already held in memory.
pub fn parse_live_boxscore(json: &str) -> AppResult<Vec<PlayerStatLine>> {
    let doc: LiveBoxscore = serde_json::from_str(json)?;
    Ok(doc.game.players.into_iter().map(PlayerStatLine::from).collect())
}

fn load_boxscore_json(path: &Path) -> AppResult<Vec<PlayerStatLine>> {
    let content = fs::read_to_string(path)?;
    parse_live_boxscore(&content)
}
