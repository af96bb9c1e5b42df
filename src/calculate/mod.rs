//! The alliance scoring pipeline.
//!
//! Transforms a flat warzone roster into scored, ranked alliances:
//! - Grouping by alliance and global floor-power computation
//! - Squad selection (active squad, bench, unfilled slots)
//! - Tier classification and effective-power weighting
//! - Synthetic filler generation for unfilled active slots
//! - Per-alliance aggregation, scoring, and pairwise matchups
//!
//! Pure and single-pass: no I/O, no shared mutable state, and input records
//! are never mutated.

pub mod aggregate;
pub mod classify;
pub mod matchup;
pub mod roster;
pub mod score;
pub mod squad;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AcisConfig;
use crate::models::{Player, ScoredAlliance, WarzoneAnalysis};

/// Analysis errors.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Mixed warzones in one batch: saw both \"{first}\" and \"{other}\"; partition by warzone before analyzing")]
    MixedWarzones { first: String, other: String },
}

/// Run the full pipeline over one warzone's roster.
///
/// The batch must belong to a single warzone; mixed input is rejected with
/// no partial result. An empty roster yields an empty analysis.
pub fn analyze_warzone(
    players: &[Player],
    config: &AcisConfig,
) -> Result<WarzoneAnalysis, AnalysisError> {
    let warzone = roster::ensure_single_warzone(players)?;
    let floor_power = roster::warzone_floor(players);
    debug!(warzone = %warzone, floor_power, "Computed warzone floor");

    let groups = roster::group_by_alliance(players);
    let mut alliances: Vec<ScoredAlliance> = groups
        .into_iter()
        .map(|(alliance, members)| {
            let group =
                squad::select_squads(alliance, warzone.clone(), members, floor_power, config);
            let aggregate = aggregate::aggregate_alliance(&group, config);
            score::score_alliance(aggregate, config)
        })
        .collect();

    score::rank_alliances(&mut alliances);
    let matchups = matchup::build_matchups(&alliances, config.scoring.even_matchup_band);

    info!(
        warzone = %warzone,
        alliances = alliances.len(),
        matchups = matchups.len(),
        "Analysis complete"
    );

    Ok(WarzoneAnalysis {
        warzone,
        computed_at: Utc::now(),
        floor_power,
        alliances,
        matchups,
    })
}
