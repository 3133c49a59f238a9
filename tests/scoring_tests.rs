mod common;
use common::{approx, scored};
use dfsflow::core::Core;
use dfsflow::core::calculator::{cmp_desc_undefined_last, flow, scoring};
use dfsflow::models::{PlayerStatLine, QuarterPoints, SalaryBook, SalaryEntry};

fn line(name: &str, points: f64) -> PlayerStatLine {
    PlayerStatLine {
        player_name: name.to_string(),
        points,
        ..Default::default()
    }
}

#[test]
fn test_empty_stat_line_scores_zero() {
    assert_eq!(scoring::fantasy_points(&PlayerStatLine::empty("Nobody")), 0.0);
}

#[test]
fn test_fantasy_points_weights() {
    let l = PlayerStatLine {
        player_name: "A".into(),
        points: 10.0,
        rebounds: 4.0,
        assists: 2.0,
        steals: 1.0,
        blocks: 1.0,
        turnovers: 2.0,
        three_pointers_made: 1.0,
        quarters: QuarterPoints::default(),
    };

    // 10 + 5 + 3 + 2 + 2 + 0.5 - 1
    assert!(approx(scoring::fantasy_points(&l), 21.5));
}

#[test]
fn test_negative_points_are_kept() {
    let l = PlayerStatLine {
        turnovers: 4.0,
        ..PlayerStatLine::empty("Butterfingers")
    };
    assert!(approx(scoring::fantasy_points(&l), -2.0));
}

#[test]
fn test_value_per_thousand() {
    assert!(approx(scoring::value(21.5, Some(5000)).unwrap(), 4.3));
}

#[test]
fn test_value_undefined_for_zero_or_missing_salary() {
    assert_eq!(scoring::value(30.0, Some(0)), None);
    assert_eq!(scoring::value(30.0, None), None);
    assert_eq!(scoring::value(0.0, Some(0)), None);
}

#[test]
fn test_left_join_keeps_unpriced_players() {
    let salaries = SalaryBook::from_entries(vec![
        SalaryEntry::new("A", Some(5000)),
        SalaryEntry::new("Ghost", Some(9000)),
    ]);

    let players = scoring::score_players(vec![line("A", 10.0), line("B", 20.0)], &salaries);

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name(), "A");
    assert_eq!(players[0].salary, Some(5000));
    assert!(approx(players[0].value.unwrap(), 2.0));
    assert_eq!(players[1].name(), "B");
    assert_eq!(players[1].salary, None);
    assert_eq!(players[1].value, None);
}

#[test]
fn test_duplicate_salary_rows_first_wins() {
    let salaries = SalaryBook::from_entries(vec![
        SalaryEntry::new("A", Some(5000)),
        SalaryEntry::new("A", Some(9000)),
    ]);
    assert_eq!(salaries.len(), 1);
    assert_eq!(salaries.salary_of("A"), Some(5000));
}

#[test]
fn test_player_report_sorted_by_points_ties_in_input_order() {
    let salaries = SalaryBook::default();
    let report = Core::build_player_report(
        vec![line("Low", 5.0), line("TieA", 12.0), line("High", 40.0), line("TieB", 12.0)],
        &salaries,
        5.0,
    );

    let names: Vec<&str> = report.players.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["High", "TieA", "TieB", "Low"]);
}

#[test]
fn test_undefined_values_sort_last() {
    let mut values = vec![Some(1.0), None, Some(3.0), None, Some(2.0)];
    values.sort_by(|a, b| cmp_desc_undefined_last(*a, *b));
    assert_eq!(values, vec![Some(3.0), Some(2.0), Some(1.0), None, None]);
}

#[test]
fn test_quarter_flow_sums_all_players() {
    let players = vec![
        scored("A", 20.0, None, [5.0, 5.0, 10.0, 10.0]),
        scored("B", 7.0, Some(3000), [1.0, 2.0, 3.0, 4.0]),
    ];
    let q = flow::quarter_flow(&players);
    assert_eq!(q, QuarterPoints::new(6.0, 7.0, 13.0, 14.0));
}

#[test]
fn test_leverage_alerts_need_value_and_below_mean() {
    let salaries = SalaryBook::from_entries(vec![
        SalaryEntry::new("A", Some(10000)),
        SalaryEntry::new("B", Some(3000)),
        SalaryEntry::new("C", Some(0)),
        SalaryEntry::new("D", Some(2000)),
    ]);
    let report = Core::build_player_report(
        vec![line("A", 50.0), line("B", 20.0), line("C", 5.0), line("D", 12.0)],
        &salaries,
        5.0,
    );

    assert!(approx(report.mean_points, 21.75));
    let alerted: Vec<&str> = report.leverage.iter().map(|p| p.name()).collect();
    assert_eq!(alerted, vec!["B", "D"]);
}

#[test]
fn test_empty_boxscore_has_no_alerts() {
    let report = Core::build_player_report(Vec::new(), &SalaryBook::default(), 5.0);
    assert!(report.players.is_empty());
    assert!(report.leverage.is_empty());
    assert_eq!(report.mean_points, 0.0);
}
