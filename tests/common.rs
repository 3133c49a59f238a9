#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dfsflow::core::calculator::scoring;
use dfsflow::models::{PlayerStatLine, QuarterPoints, ScoredPlayer};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dfs() -> Command {
    cargo_bin_cmd!("dfsflow")
}

/// Write `content` to a unique file inside the system temp dir
pub fn temp_file(name: &str, ext: &str, content: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("dfsflow_{}.{}", name, ext));
    fs::write(&path, content).expect("write fixture");
    path
}

/// Temp output path, removed if a previous run left it behind
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("dfsflow_{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Scored player built directly, bypassing the stat weights.
pub fn scored(name: &str, fantasy_points: f64, salary: Option<u32>, q: [f64; 4]) -> ScoredPlayer {
    ScoredPlayer {
        stats: PlayerStatLine {
            player_name: name.to_string(),
            quarters: QuarterPoints::new(q[0], q[1], q[2], q[3]),
            ..Default::default()
        },
        salary,
        fantasy_points,
        value: scoring::value(fantasy_points, salary.map(u64::from)),
    }
}

/// Four priced players whose quarter splits give four distinct urgencies.
pub fn four_players() -> Vec<ScoredPlayer> {
    vec![
        scored("P1", 30.0, Some(9000), [5.0, 5.0, 10.0, 10.0]),
        scored("P2", 20.0, Some(7000), [10.0, 10.0, 0.0, 0.0]),
        scored("P3", 10.0, Some(5000), [0.0, 0.0, 5.0, 5.0]),
        scored("P4", 8.0, Some(4000), [2.0, 2.0, 2.0, 2.0]),
    ]
}

pub const SALARIES_CSV: &str = "\
Position,Name,ID,Salary,TeamAbbrev
SF,P1,1,9000,BOS
PG,P2,2,7000,BOS
C,P3,3,5000,NYK
SG,P4,4,4000,NYK
";

/// Same players as `four_players` (points only) plus an unpriced P5.
pub const BOXSCORE_CSV: &str = "\
PLAYER,PTS,REB,AST,STL,BLK,TOV,3PM,Q1,Q2,Q3,Q4
P1,30,,,,,,,5,5,10,10
P2,20,,,,,,,10,10,0,0
P3,10,,,,,,,0,0,5,5
P4,8,,,,,,,2,2,2,2
P5,6,,,,,,,0,6,0,0
";

pub const ENTRIES_CSV: &str = "\
Entry ID,Contest Name,S1,S2
9001,Slate,P1,P2
9002,Slate,P3,P4
9003,Slate,P1,P3
9004,Slate,P2,P4
";
