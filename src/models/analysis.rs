//! Full analysis run output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Matchup, ScoredAlliance};

/// The result of one analysis run over a warzone roster.
///
/// Created once per run and immutable thereafter. `alliances` is ordered by
/// score descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarzoneAnalysis {
    /// Warzone the roster belongs to
    pub warzone: String,

    /// When this analysis was computed
    pub computed_at: DateTime<Utc>,

    /// Smallest positive raw power across the whole input batch
    pub floor_power: f64,

    /// Scored alliances, best first
    pub alliances: Vec<ScoredAlliance>,

    /// Pairwise matchups between all scored alliances
    pub matchups: Vec<Matchup>,
}

impl WarzoneAnalysis {
    /// Look up a scored alliance by tag.
    pub fn get_alliance(&self, alliance: &str) -> Option<&ScoredAlliance> {
        self.alliances
            .iter()
            .find(|a| a.alliance.eq_ignore_ascii_case(alliance))
    }

    /// The top `n` alliances by score.
    pub fn top(&self, n: usize) -> &[ScoredAlliance] {
        &self.alliances[..n.min(self.alliances.len())]
    }
}
