//! Alliance grouping and scoring models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ClassifiedPlayer, Player, Tier};

/// One alliance's roster after grouping and squad selection.
///
/// `warzone_floor_power` is the smallest positive raw power across the
/// *entire* input batch, not this alliance's weakest member. Every group
/// built from one batch carries the identical value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllianceGroup {
    /// Alliance tag
    pub alliance: String,

    /// Warzone shared by all members
    pub warzone: String,

    /// All group members, ordered by raw power descending
    pub players_sorted: Vec<Player>,

    /// Top players filling the active squad
    pub active_real: Vec<Player>,

    /// Reserve players; only populated when the active squad is fully real
    pub bench_real: Vec<Player>,

    /// Active slots with no real player to fill them
    pub missing_active_count: usize,

    /// Batch-wide floor power used to value synthetic fillers
    pub warzone_floor_power: f64,
}

/// Per-tier player counts across one alliance's active squad and bench.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierTally(BTreeMap<Tier, u32>);

impl TierTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one player in the given tier.
    pub fn increment(&mut self, tier: Tier) {
        *self.0.entry(tier).or_insert(0) += 1;
    }

    /// Count for a single tier (0 when absent).
    pub fn count(&self, tier: Tier) -> u32 {
        self.0.get(&tier).copied().unwrap_or(0)
    }

    /// Sum of counts across all tiers.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Iterate over non-zero tiers, strongest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, u32)> + '_ {
        self.0.iter().map(|(t, c)| (*t, *c))
    }
}

/// Raw aggregation output for one alliance, before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllianceAggregate {
    /// Alliance tag
    pub alliance: String,

    /// Warzone
    pub warzone: String,

    /// Classified active squad (real players plus synthetic fillers)
    pub active_players: Vec<ClassifiedPlayer>,

    /// Classified bench
    pub bench_players: Vec<ClassifiedPlayer>,

    /// Sum of effective power over the active squad
    pub active_power: f64,

    /// Sum of effective power over the bench
    pub bench_power: f64,

    /// Tier counts across active and bench combined
    pub tier_counts: TierTally,
}

impl AllianceAggregate {
    /// Number of synthetic fillers in the active squad.
    pub fn assumed_count(&self) -> usize {
        self.active_players.iter().filter(|p| p.assumed).count()
    }
}

/// Final scored record for one alliance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAlliance {
    /// Alliance tag
    pub alliance: String,

    /// Warzone
    pub warzone: String,

    /// Classified active squad
    pub active_players: Vec<ClassifiedPlayer>,

    /// Classified bench
    pub bench_players: Vec<ClassifiedPlayer>,

    /// Sum of effective power over the active squad
    pub active_power: f64,

    /// Sum of effective power over the bench
    pub bench_power: f64,

    /// Tier counts across active and bench combined
    pub tier_counts: TierTally,

    /// Roster completeness multiplier (1.0 = fully real active squad)
    pub stability_factor: f64,

    /// Absolute combat score before the stability adjustment
    pub acs_absolute: f64,
}

impl ScoredAlliance {
    /// The ranking key: absolute score discounted by stability.
    pub fn score(&self) -> f64 {
        self.acs_absolute * self.stability_factor
    }

    /// Number of synthetic fillers in the active squad.
    pub fn assumed_count(&self) -> usize {
        self.active_players.iter().filter(|p| p.assumed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_tally_counts() {
        let mut tally = TierTally::new();
        tally.increment(Tier::Whale);
        tally.increment(Tier::Whale);
        tally.increment(Tier::Krill);

        assert_eq!(tally.count(Tier::Whale), 2);
        assert_eq!(tally.count(Tier::Krill), 1);
        assert_eq!(tally.count(Tier::Shark), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_tier_tally_iter_strongest_first() {
        let mut tally = TierTally::new();
        tally.increment(Tier::Plankton);
        tally.increment(Tier::MegaWhale);
        tally.increment(Tier::Shrimp);

        let tiers: Vec<Tier> = tally.iter().map(|(t, _)| t).collect();
        assert_eq!(tiers, vec![Tier::MegaWhale, Tier::Shrimp, Tier::Plankton]);
    }

    #[test]
    fn test_tier_tally_serialization() {
        let mut tally = TierTally::new();
        tally.increment(Tier::Shark);
        tally.increment(Tier::Shark);

        let json = serde_json::to_string(&tally).unwrap();
        let back: TierTally = serde_json::from_str(&json).unwrap();
        assert_eq!(back.count(Tier::Shark), 2);
        assert_eq!(back.total(), 2);
    }

    #[test]
    fn test_scored_alliance_score() {
        let scored = ScoredAlliance {
            alliance: "WOLF".to_string(),
            warzone: "wz-881".to_string(),
            active_players: Vec::new(),
            bench_players: Vec::new(),
            active_power: 100.0,
            bench_power: 40.0,
            tier_counts: TierTally::new(),
            stability_factor: 0.8,
            acs_absolute: 110.0,
        };

        assert!((scored.score() - 88.0).abs() < 1e-9);
        assert_eq!(scored.assumed_count(), 0);
    }
}
