// src/export/model.rs

use crate::models::report::{ImpactReport, LineupReport, PlayerReport};
use crate::models::{ImpactMetrics, LineupMetrics, QuarterPoints, ScoredPlayer};
use crate::utils::formatting::round_to;
use serde::Serialize;

/// A flat export record: serde handles CSV/JSON, `cells` feeds XLSX.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlayerRow {
    pub player_name: String,
    pub fantasy_points: f64,
    pub salary: Option<u32>,
    pub value: Option<f64>,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl From<&ScoredPlayer> for PlayerRow {
    fn from(p: &ScoredPlayer) -> Self {
        let q = p.quarters();
        Self {
            player_name: p.name().to_string(),
            fantasy_points: p.fantasy_points,
            salary: p.salary,
            value: p.value,
            q1: q.q1,
            q2: q.q2,
            q3: q.q3,
            q4: q.q4,
        }
    }
}

impl ExportRow for PlayerRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "player_name",
            "fantasy_points",
            "salary",
            "value",
            "q1",
            "q2",
            "q3",
            "q4",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.player_name.clone(),
            self.fantasy_points.to_string(),
            opt(self.salary),
            opt(self.value),
            self.q1.to_string(),
            self.q2.to_string(),
            self.q3.to_string(),
            self.q4.to_string(),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineupRow {
    pub lineup_id: u32,
    pub players: String,
    pub unresolved: usize,
    pub total_points: f64,
    pub total_salary: Option<u64>,
    pub value: Option<f64>,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub early: f64,
    pub late: f64,
    pub minutes_remaining: u32,
    pub swap_urgency: Option<f64>,
    pub high_swap_pressure: bool,
}

impl LineupRow {
    fn new(m: &LineupMetrics, flagged: bool) -> Self {
        Self {
            lineup_id: m.lineup_id.0,
            players: m.players.join("|"),
            unresolved: m.unresolved,
            total_points: round_to(m.total_points, 2),
            total_salary: m.total_salary,
            value: m.value.map(|v| round_to(v, 2)),
            q1: m.quarters.q1,
            q2: m.quarters.q2,
            q3: m.quarters.q3,
            q4: m.quarters.q4,
            early: round_to(m.early, 2),
            late: round_to(m.late, 2),
            minutes_remaining: m.minutes_remaining,
            swap_urgency: m.swap_urgency.map(|u| round_to(u, 3)),
            high_swap_pressure: flagged,
        }
    }
}

impl ExportRow for LineupRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "lineup_id",
            "players",
            "unresolved",
            "total_points",
            "total_salary",
            "value",
            "q1",
            "q2",
            "q3",
            "q4",
            "early",
            "late",
            "minutes_remaining",
            "swap_urgency",
            "high_swap_pressure",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.lineup_id.to_string(),
            self.players.clone(),
            self.unresolved.to_string(),
            self.total_points.to_string(),
            opt(self.total_salary),
            opt(self.value),
            self.q1.to_string(),
            self.q2.to_string(),
            self.q3.to_string(),
            self.q4.to_string(),
            self.early.to_string(),
            self.late.to_string(),
            self.minutes_remaining.to_string(),
            opt(self.swap_urgency),
            self.high_swap_pressure.to_string(),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ImpactRow {
    /// "all", "late_surge" or "fragile"
    pub group: &'static str,
    pub lineup_id: u32,
    pub players: String,
    pub total_points: f64,
    pub total_salary: u64,
    pub value: Option<f64>,
    pub early: f64,
    pub late: f64,
    pub impact_score: f64,
}

impl ImpactRow {
    fn new(m: &ImpactMetrics, group: &'static str) -> Self {
        Self {
            group,
            lineup_id: m.lineup_id.0,
            players: m.players.join("|"),
            total_points: round_to(m.total_points, 2),
            total_salary: m.total_salary,
            value: m.value.map(|v| round_to(v, 2)),
            early: round_to(m.early, 2),
            late: round_to(m.late, 2),
            impact_score: round_to(m.impact_score, 3),
        }
    }
}

impl ExportRow for ImpactRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "group",
            "lineup_id",
            "players",
            "total_points",
            "total_salary",
            "value",
            "early",
            "late",
            "impact_score",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.group.to_string(),
            self.lineup_id.to_string(),
            self.players.clone(),
            self.total_points.to_string(),
            self.total_salary.to_string(),
            opt(self.value),
            self.early.to_string(),
            self.late.to_string(),
            self.impact_score.to_string(),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FlowRow {
    pub quarter: &'static str,
    pub points: f64,
}

impl ExportRow for FlowRow {
    fn headers() -> Vec<&'static str> {
        vec!["quarter", "points"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.quarter.to_string(), self.points.to_string()]
    }
}

/// Rows ready to be written, one variant per record shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportData {
    Players(Vec<PlayerRow>),
    Lineups(Vec<LineupRow>),
    Impact(Vec<ImpactRow>),
    Flow(Vec<FlowRow>),
}

impl ExportData {
    pub fn players(players: &[ScoredPlayer]) -> Self {
        ExportData::Players(players.iter().map(PlayerRow::from).collect())
    }

    pub fn player_report(report: &PlayerReport) -> Self {
        Self::players(&report.players)
    }

    pub fn leverage(report: &PlayerReport) -> Self {
        Self::players(&report.leverage)
    }

    pub fn flow(flow: &QuarterPoints) -> Self {
        ExportData::Flow(
            flow.labelled()
                .into_iter()
                .map(|(quarter, points)| FlowRow { quarter, points })
                .collect(),
        )
    }

    pub fn lineups(report: &LineupReport) -> Self {
        ExportData::Lineups(
            report
                .lineups
                .iter()
                .map(|m| LineupRow::new(m, report.is_flagged(m.lineup_id)))
                .collect(),
        )
    }

    pub fn high_pressure(report: &LineupReport) -> Self {
        ExportData::Lineups(report.high_pressure().map(|m| LineupRow::new(m, true)).collect())
    }

    pub fn impact(report: &ImpactReport) -> Self {
        ExportData::Impact(report.lineups.iter().map(|m| ImpactRow::new(m, "all")).collect())
    }

    pub fn impact_alerts(report: &ImpactReport) -> Self {
        let surge = report.late_surge.iter().map(|m| ImpactRow::new(m, "late_surge"));
        let fragile = report.fragile.iter().map(|m| ImpactRow::new(m, "fragile"));
        ExportData::Impact(surge.chain(fragile).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            ExportData::Players(r) => r.len(),
            ExportData::Lineups(r) => r.len(),
            ExportData::Impact(r) => r.len(),
            ExportData::Flow(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
