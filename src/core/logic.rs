use crate::core::calculator::{cmp_desc_undefined_last, flow, impact, lineup, scoring, urgency};
use crate::core::calculator::impact::SyntheticParams;
use crate::models::report::{ImpactReport, LineupReport, PlayerReport};
use crate::models::{LineupEntry, PlayerStatLine, SalaryBook, ScoredPlayer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Batch entry points of the engine. Each call recomputes everything from
/// its inputs; nothing is cached between calls.
pub struct Core;

impl Core {
    /// Scores the boxscore, joins salaries and builds the player-level flow.
    pub fn build_player_report(
        stats: Vec<PlayerStatLine>,
        salaries: &SalaryBook,
        value_alert_threshold: f64,
    ) -> PlayerReport {
        let mut players = scoring::score_players(stats, salaries);

        let flow = flow::quarter_flow(&players);
        let mean_points = flow::mean_fantasy_points(&players);
        let leverage = flow::leverage_alerts(&players, value_alert_threshold);

        // stable: ties keep boxscore order
        players.sort_by(|a, b| b.fantasy_points.total_cmp(&a.fantasy_points));

        info!(
            players = players.len(),
            priced = players.iter().filter(|p| p.salary.is_some()).count(),
            "boxscore scored"
        );

        PlayerReport {
            players,
            flow,
            mean_points,
            leverage,
        }
    }

    /// Aggregates real lineups and classifies swap pressure.
    pub fn build_lineup_report(
        players: &[ScoredPlayer],
        entries: &[LineupEntry],
        current_quarter: u8,
    ) -> LineupReport {
        let mut lineups = lineup::aggregate_lineups(players, entries, current_quarter);
        let classification = urgency::classify(&lineups);

        lineups.sort_by(|a, b| {
            cmp_desc_undefined_last(a.swap_urgency, b.swap_urgency)
                .then(a.lineup_id.cmp(&b.lineup_id))
        });

        info!(
            entries = entries.len(),
            aggregated = lineups.len(),
            flagged = classification.flagged.len(),
            "lineups aggregated"
        );

        LineupReport {
            lineups,
            cutoff: classification.cutoff,
            flagged: classification.flagged,
        }
    }

    /// Synthesizes lineups with a generator seeded from `seed` and ranks them
    /// by impact score.
    pub fn build_impact_report(
        players: &[ScoredPlayer],
        params: &SyntheticParams,
        seed: u64,
    ) -> ImpactReport {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let entries = impact::synthesize_lineups(players, params, &mut rng);

        let metrics = impact::impact_metrics(players, &entries);
        let (lineups, late_surge, fragile) = impact::rank_impact(metrics, params.top_n);

        info!(seed, lineups = lineups.len(), "synthetic lineups built");

        ImpactReport {
            lineups,
            late_surge,
            fragile,
        }
    }
}
