//! Batch-relative swap-pressure classification.

use crate::models::{LineupId, LineupMetrics};
use tracing::debug;

/// Percentile of the urgency distribution above which a lineup is flagged.
pub const HIGH_PRESSURE_PERCENTILE: f64 = 0.75;

/// Below this many defined urgencies nothing is ranked.
pub const MIN_SAMPLE: usize = 4;

/// Linearly interpolated percentile (`q` in `[0, 1]`), rank `(n - 1) * q`.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Cutoff and flagged lineups of one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub cutoff: Option<f64>,
    pub flagged: Vec<LineupId>,
}

/// Flags lineups whose urgency is strictly above the batch 75th percentile.
///
/// Ties at the cutoff are not flagged, so an all-equal batch flags nothing.
/// Undefined urgencies take no part in the ranking.
pub fn classify(lineups: &[LineupMetrics]) -> Classification {
    let urgencies: Vec<f64> = lineups.iter().filter_map(|m| m.swap_urgency).collect();

    if urgencies.len() < MIN_SAMPLE {
        debug!(sample = urgencies.len(), "too few lineups to rank swap pressure");
        return Classification::default();
    }

    let Some(cutoff) = percentile(&urgencies, HIGH_PRESSURE_PERCENTILE) else {
        return Classification::default();
    };

    let flagged: Vec<LineupId> = lineups
        .iter()
        .filter(|m| m.swap_urgency.is_some_and(|u| u > cutoff))
        .map(|m| m.lineup_id)
        .collect();

    debug!(cutoff, flagged = flagged.len(), "swap pressure classified");

    Classification {
        cutoff: Some(cutoff),
        flagged,
    }
}
