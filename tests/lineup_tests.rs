mod common;
use common::{approx, four_players, scored};
use dfsflow::core::Core;
use dfsflow::core::calculator::lineup::{
    PlayerIndex, aggregate_lineups, lineup_metrics, minutes_remaining, swap_urgency,
};
use dfsflow::models::{LineupEntry, LineupId};

fn entry(id: u32, names: &[&str]) -> LineupEntry {
    LineupEntry::new(id, names.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_early_late_split_ignores_other_players() {
    let players = vec![
        scored("A", 99.0, Some(8000), [5.0, 5.0, 10.0, 10.0]),
        scored("B", -3.0, Some(4000), [0.0, 0.0, 0.0, 0.0]),
        scored("C", 60.0, Some(9000), [20.0, 20.0, 20.0, 20.0]),
    ];
    let index = PlayerIndex::new(&players);

    let m = lineup_metrics(&entry(1, &["A", "B"]), &index, 2).expect("resolved lineup");
    assert!(approx(m.early, 10.0));
    assert!(approx(m.late, 20.0));
}

#[test]
fn test_minutes_remaining() {
    assert_eq!(minutes_remaining(1), 36);
    assert_eq!(minutes_remaining(2), 24);
    assert_eq!(minutes_remaining(3), 12);
    assert_eq!(minutes_remaining(4), 0);
    assert_eq!(minutes_remaining(5), 0);
}

#[test]
fn test_swap_urgency_formula() {
    // (20 / 50) * (24 / 48) * (50 / 12)
    let u = swap_urgency(20.0, 50.0, 24, Some(12000)).unwrap();
    assert!(approx(u, 10.0 / 12.0));
}

#[test]
fn test_swap_urgency_floors() {
    // points and salary below 1 are floored to 1
    let u = swap_urgency(0.5, 0.5, 48, Some(500)).unwrap();
    assert!(approx(u, 0.5 * 1.0 * 0.5));
}

#[test]
fn test_swap_urgency_undefined_without_salary() {
    assert_eq!(swap_urgency(10.0, 20.0, 36, None), None);
}

#[test]
fn test_lineup_metrics_totals() {
    let players = vec![
        scored("A", 40.0, Some(8000), [5.0, 5.0, 10.0, 10.0]),
        scored("B", 10.0, Some(4000), [0.0, 0.0, 0.0, 0.0]),
    ];
    let index = PlayerIndex::new(&players);

    let m = lineup_metrics(&entry(7, &["A", "B", "Nobody"]), &index, 2).unwrap();

    assert_eq!(m.lineup_id, LineupId(7));
    assert_eq!(m.players, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(m.unresolved, 1);
    assert!(approx(m.total_points, 50.0));
    assert_eq!(m.total_salary, Some(12000));
    assert!(approx(m.value.unwrap(), 50.0 / 12.0));
    assert_eq!(m.minutes_remaining, 24);
    assert!(approx(m.swap_urgency.unwrap(), 10.0 / 12.0));
}

#[test]
fn test_missing_salaries_are_skipped_in_sum() {
    let players = vec![
        scored("A", 40.0, Some(8000), [0.0, 0.0, 20.0, 20.0]),
        scored("B", 10.0, None, [5.0, 5.0, 0.0, 0.0]),
        scored("C", 5.0, None, [0.0, 0.0, 0.0, 5.0]),
    ];
    let index = PlayerIndex::new(&players);

    let ab = lineup_metrics(&entry(1, &["A", "B"]), &index, 1).unwrap();
    assert_eq!(ab.total_salary, Some(8000));
    assert!(ab.swap_urgency.is_some());

    let bc = lineup_metrics(&entry(2, &["B", "C"]), &index, 1).unwrap();
    assert_eq!(bc.total_salary, None);
    assert_eq!(bc.value, None);
    assert_eq!(bc.swap_urgency, None);
}

#[test]
fn test_lineup_without_resolved_players_is_excluded() {
    let players = four_players();
    let metrics = aggregate_lineups(
        &players,
        &[entry(1, &["P1"]), entry(2, &["Ghost", "Phantom"]), entry(3, &[])],
        1,
    );

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].lineup_id, LineupId(1));
}

#[test]
fn test_report_sorted_by_urgency_keeps_lineup_ids() {
    let players = four_players();
    let entries = vec![
        entry(1, &["P1", "P2"]),
        entry(2, &["P3", "P4"]),
        entry(3, &["P1", "P3"]),
        entry(4, &["P2", "P4"]),
    ];

    let report = Core::build_lineup_report(&players, &entries, 1);

    let order: Vec<u32> = report.lineups.iter().map(|m| m.lineup_id.0).collect();
    assert_eq!(order, vec![3, 2, 1, 4]);

    // lineup 3 = P1 + P3: (30 / 40) * (36 / 48) * (40 / 14)
    let top = &report.lineups[0];
    assert!(approx(top.swap_urgency.unwrap(), 0.75 * 0.75 * (40.0 / 14.0)));

    assert_eq!(report.flagged, vec![LineupId(3)]);
    let flagged: Vec<LineupId> = report.high_pressure().map(|m| m.lineup_id).collect();
    assert_eq!(flagged, vec![LineupId(3)]);
}

#[test]
fn test_aggregation_is_deterministic() {
    let players = four_players();
    let entries = vec![entry(1, &["P1", "P2", "P5"]), entry(2, &["P3", "P4"])];

    let first = Core::build_lineup_report(&players, &entries, 3);
    let second = Core::build_lineup_report(&players, &entries, 3);

    assert_eq!(first.lineups, second.lineups);
    assert_eq!(first.flagged, second.flagged);
    assert_eq!(first.cutoff, second.cutoff);
}

#[test]
fn test_final_quarter_has_zero_urgency() {
    let players = four_players();
    let report = Core::build_lineup_report(&players, &[entry(1, &["P1", "P3"])], 4);

    assert_eq!(report.lineups[0].minutes_remaining, 0);
    assert_eq!(report.lineups[0].swap_urgency, Some(0.0));
}
