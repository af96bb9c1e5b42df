//! Alliance scoring and ranking.

use crate::config::{AcisConfig, ScoringConfig};
use crate::models::{AllianceAggregate, ScoredAlliance};

/// Absolute combat score: active power plus a discounted bench
/// contribution.
pub fn acs_absolute(active_power: f64, bench_power: f64, scoring: &ScoringConfig) -> f64 {
    active_power + bench_power * scoring.bench_factor
}

/// Roster completeness multiplier in `[0, 1]`.
///
/// Each assumed active slot erodes the score proportionally to its share of
/// the squad, scaled by the configured penalty. A fully real squad scores
/// 1.0.
pub fn stability_factor(
    assumed_count: usize,
    active_squad_size: usize,
    scoring: &ScoringConfig,
) -> f64 {
    if active_squad_size == 0 {
        return 0.0;
    }

    let assumed_share = assumed_count as f64 / active_squad_size as f64;
    (1.0 - scoring.assumption_penalty * assumed_share).max(0.0)
}

/// Attach scoring metrics to an aggregate.
pub fn score_alliance(aggregate: AllianceAggregate, config: &AcisConfig) -> ScoredAlliance {
    let acs = acs_absolute(
        aggregate.active_power,
        aggregate.bench_power,
        &config.scoring,
    );
    let stability = stability_factor(
        aggregate.assumed_count(),
        config.active_squad_size,
        &config.scoring,
    );

    ScoredAlliance {
        alliance: aggregate.alliance,
        warzone: aggregate.warzone,
        active_players: aggregate.active_players,
        bench_players: aggregate.bench_players,
        active_power: aggregate.active_power,
        bench_power: aggregate.bench_power,
        tier_counts: aggregate.tier_counts,
        stability_factor: stability,
        acs_absolute: acs,
    }
}

/// Sort alliances by score descending; ties break by alliance name so
/// output order is deterministic.
pub fn rank_alliances(alliances: &mut [ScoredAlliance]) {
    alliances.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.alliance.cmp(&b.alliance))
    });
}
