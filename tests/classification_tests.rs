mod common;
use common::approx;
use dfsflow::core::calculator::urgency::{classify, percentile};
use dfsflow::models::{LineupId, LineupMetrics, QuarterPoints};

fn with_urgency(id: u32, urgency: Option<f64>) -> LineupMetrics {
    LineupMetrics {
        lineup_id: LineupId(id),
        players: vec![format!("player-{id}")],
        unresolved: 0,
        total_points: 10.0,
        total_salary: Some(5000),
        value: Some(2.0),
        quarters: QuarterPoints::default(),
        early: 0.0,
        late: 0.0,
        minutes_remaining: 36,
        swap_urgency: urgency,
    }
}

fn batch(urgencies: &[Option<f64>]) -> Vec<LineupMetrics> {
    urgencies
        .iter()
        .enumerate()
        .map(|(i, u)| with_urgency(i as u32 + 1, *u))
        .collect()
}

#[test]
fn test_percentile_linear_interpolation() {
    assert!(approx(percentile(&[1.0, 2.0, 3.0, 4.0], 0.75).unwrap(), 3.25));
    assert!(approx(percentile(&[4.0, 1.0, 3.0, 2.0], 0.75).unwrap(), 3.25));
    assert!(approx(percentile(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.75).unwrap(), 4.0));
    assert!(approx(percentile(&[7.0], 0.75).unwrap(), 7.0));
    assert_eq!(percentile(&[], 0.75), None);
}

#[test]
fn test_four_lineups_flag_only_the_top() {
    let c = classify(&batch(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]));
    assert!(approx(c.cutoff.unwrap(), 3.25));
    assert_eq!(c.flagged, vec![LineupId(4)]);
}

#[test]
fn test_fewer_than_four_lineups_flag_nothing() {
    let c = classify(&batch(&[Some(1.0), Some(50.0), Some(100.0)]));
    assert_eq!(c.cutoff, None);
    assert!(c.flagged.is_empty());

    assert!(classify(&[]).flagged.is_empty());
}

#[test]
fn test_ties_at_cutoff_are_not_flagged() {
    // cutoff lands exactly on 3.0
    let c = classify(&batch(&[Some(1.0), Some(2.0), Some(3.0), Some(3.0), Some(3.0)]));
    assert!(approx(c.cutoff.unwrap(), 3.0));
    assert!(c.flagged.is_empty());
}

#[test]
fn test_all_equal_batch_flags_nothing() {
    let c = classify(&batch(&[Some(0.5); 6]));
    assert!(c.flagged.is_empty());
}

#[test]
fn test_undefined_urgencies_are_not_ranked() {
    let c = classify(&batch(&[Some(1.0), Some(2.0), Some(3.0), None]));
    assert!(c.flagged.is_empty());

    let c = classify(&batch(&[None, Some(1.0), Some(2.0), Some(3.0), Some(4.0)]));
    assert_eq!(c.flagged, vec![LineupId(5)]);
}

#[test]
fn test_flags_are_batch_relative() {
    let low = classify(&batch(&[Some(0.1), Some(0.2), Some(0.3), Some(0.4)]));
    let high = classify(&batch(&[Some(10.0), Some(20.0), Some(30.0), Some(40.0)]));
    assert_eq!(low.flagged, high.flagged);
}
