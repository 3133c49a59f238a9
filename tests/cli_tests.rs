mod common;
use common::{BOXSCORE_CSV, ENTRIES_CSV, SALARIES_CSV, dfs, temp_file, temp_out};
use predicates::prelude::*;
use std::fs;

fn inputs(name: &str) -> (String, String) {
    let s = temp_file(&format!("{name}_salaries"), "csv", SALARIES_CSV);
    let b = temp_file(&format!("{name}_boxscore"), "csv", BOXSCORE_CSV);
    (s.display().to_string(), b.display().to_string())
}

#[test]
fn test_score_prints_player_table_and_flow() {
    let (s, b) = inputs("cli_score");

    dfs()
        .args(["score", "--salaries", &s, "--boxscore", &b])
        .assert()
        .success()
        .stdout(predicate::str::contains("P1"))
        .stdout(predicate::str::contains("P5"))
        .stdout(predicate::str::contains("Quarter-by-Quarter"))
        .stdout(predicate::str::contains("Late Swap Alerts"));
}

#[test]
fn test_lineups_with_entries_flags_high_pressure() {
    let (s, b) = inputs("cli_lineups");
    let e = temp_file("cli_lineups_entries", "csv", ENTRIES_CSV);

    dfs()
        .args([
            "lineups",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--entries",
            &e.display().to_string(),
            "--slots",
            "S1,S2",
            "--quarter",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 lineup(s) under high swap pressure"));
}

#[test]
fn test_lineups_without_entries_needs_a_pool() {
    let (s, b) = inputs("cli_synthetic");

    dfs()
        .args(["lineups", "--salaries", &s, "--boxscore", &b])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough players to construct lineups."));
}

#[test]
fn test_quarter_out_of_range_is_rejected() {
    let (s, b) = inputs("cli_quarter");

    dfs()
        .args(["lineups", "--salaries", &s, "--boxscore", &b, "--quarter", "5"])
        .assert()
        .failure();
}

#[test]
fn test_missing_slot_column_fails() {
    let (s, b) = inputs("cli_bad_slots");
    let e = temp_file("cli_bad_slots_entries", "csv", ENTRIES_CSV);

    dfs()
        .args([
            "lineups",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--entries",
            &e.display().to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing column 'PG'"));
}

#[test]
fn test_export_players_json_has_null_value() {
    let (s, b) = inputs("cli_export_json");
    let out = temp_out("cli_export_json", "json");

    dfs()
        .args([
            "export",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--table",
            "players",
            "--file",
            &out.display().to_string(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["player_name"], "P1");
    assert_eq!(rows[4]["player_name"], "P5");
    assert!(rows[4]["value"].is_null());
    assert!(rows[4]["salary"].is_null());
}

#[test]
fn test_export_alerts_csv() {
    let (s, b) = inputs("cli_export_alerts");
    let e = temp_file("cli_export_alerts_entries", "csv", ENTRIES_CSV);
    let out = temp_out("cli_export_alerts", "csv");

    dfs()
        .args([
            "export",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--entries",
            &e.display().to_string(),
            "--slots",
            "S1,S2",
            "--table",
            "alerts",
            "--format",
            "csv",
            "--file",
            &out.display().to_string(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("lineup_id,players,"));
    assert!(lines[1].starts_with("3,P1|P3,"));
    assert!(lines[1].ends_with(",true"));
}

#[test]
fn test_export_keeps_existing_file_when_declined() {
    let (s, b) = inputs("cli_export_keep");
    let out = temp_out("cli_export_keep", "csv");
    fs::write(&out, "previous report\n").unwrap();

    dfs()
        .args([
            "export",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--file",
            &out.display().to_string(),
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("left untouched"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "previous report\n");

    dfs()
        .args([
            "export",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--file",
            &out.display().to_string(),
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("player_name,"));
}

#[test]
fn test_export_unknown_extension_fails() {
    let (s, b) = inputs("cli_export_ext");
    let out = temp_out("cli_export_ext", "txt");

    dfs()
        .args([
            "export",
            "--salaries",
            &s,
            "--boxscore",
            &b,
            "--file",
            &out.display().to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export format not supported"));
}

#[test]
fn test_config_init_and_print() {
    let cfg = temp_out("cli_config", "yaml");
    let cfg_str = cfg.display().to_string();

    dfs()
        .args(["--config", &cfg_str, "config", "--init"])
        .assert()
        .success();
    assert!(cfg.exists());

    fs::write(&cfg, "seed: 99\n").unwrap();

    dfs()
        .args(["--config", &cfg_str, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed: 99"))
        .stdout(predicate::str::contains("roster_slots"));
}
