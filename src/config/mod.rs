//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::Tier;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-tier minimum power thresholds.
///
/// Each interior tier owns the half-open range `[min, next_tier_min)`;
/// Mega Whale is unbounded above and Krill is the catch-all below
/// `shrimp_min`. Plankton carries no threshold at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_mega_whale_min")]
    pub mega_whale_min: f64,

    #[serde(default = "default_whale_min")]
    pub whale_min: f64,

    #[serde(default = "default_shark_min")]
    pub shark_min: f64,

    #[serde(default = "default_piranha_min")]
    pub piranha_min: f64,

    #[serde(default = "default_shrimp_min")]
    pub shrimp_min: f64,
}

fn default_mega_whale_min() -> f64 {
    100_000_000.0
}

fn default_whale_min() -> f64 {
    60_000_000.0
}

fn default_shark_min() -> f64 {
    40_000_000.0
}

fn default_piranha_min() -> f64 {
    25_000_000.0
}

fn default_shrimp_min() -> f64 {
    12_000_000.0
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            mega_whale_min: default_mega_whale_min(),
            whale_min: default_whale_min(),
            shark_min: default_shark_min(),
            piranha_min: default_piranha_min(),
            shrimp_min: default_shrimp_min(),
        }
    }
}

impl TierThresholds {
    /// Minimum power for a tier. Krill and Plankton have no threshold.
    pub fn min(&self, tier: Tier) -> f64 {
        match tier {
            Tier::MegaWhale => self.mega_whale_min,
            Tier::Whale => self.whale_min,
            Tier::Shark => self.shark_min,
            Tier::Piranha => self.piranha_min,
            Tier::Shrimp => self.shrimp_min,
            Tier::Krill | Tier::Plankton => 0.0,
        }
    }

    /// The `[min, max)` range a tier owns, when it has one.
    ///
    /// Only the interior tiers carry a range. Mega Whale (unbounded above),
    /// Krill (the floor catch-all) and Plankton (synthetic) have none; their
    /// position factor is fixed at 1.
    pub fn range(&self, tier: Tier) -> Option<(f64, f64)> {
        match tier {
            Tier::MegaWhale => None,
            Tier::Whale => Some((self.whale_min, self.mega_whale_min)),
            Tier::Shark => Some((self.shark_min, self.whale_min)),
            Tier::Piranha => Some((self.piranha_min, self.shark_min)),
            Tier::Shrimp => Some((self.shrimp_min, self.piranha_min)),
            Tier::Krill | Tier::Plankton => None,
        }
    }
}

/// Per-tier effective-power multipliers.
///
/// Tuning knobs reflecting each tier's disproportionate combat value: a
/// mega whale contributes more per unit of raw power than a krill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierWeights {
    #[serde(default = "default_weight_mega_whale")]
    pub mega_whale: f64,

    #[serde(default = "default_weight_whale")]
    pub whale: f64,

    #[serde(default = "default_weight_shark")]
    pub shark: f64,

    #[serde(default = "default_weight_piranha")]
    pub piranha: f64,

    #[serde(default = "default_weight_shrimp")]
    pub shrimp: f64,

    #[serde(default = "default_weight_krill")]
    pub krill: f64,

    #[serde(default = "default_weight_plankton")]
    pub plankton: f64,
}

fn default_weight_mega_whale() -> f64 {
    1.6
}

fn default_weight_whale() -> f64 {
    1.4
}

fn default_weight_shark() -> f64 {
    1.25
}

fn default_weight_piranha() -> f64 {
    1.1
}

fn default_weight_shrimp() -> f64 {
    1.0
}

fn default_weight_krill() -> f64 {
    0.9
}

fn default_weight_plankton() -> f64 {
    0.75
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            mega_whale: default_weight_mega_whale(),
            whale: default_weight_whale(),
            shark: default_weight_shark(),
            piranha: default_weight_piranha(),
            shrimp: default_weight_shrimp(),
            krill: default_weight_krill(),
            plankton: default_weight_plankton(),
        }
    }
}

impl TierWeights {
    /// Multiplier for a tier.
    pub fn weight(&self, tier: Tier) -> f64 {
        match tier {
            Tier::MegaWhale => self.mega_whale,
            Tier::Whale => self.whale,
            Tier::Shark => self.shark,
            Tier::Piranha => self.piranha,
            Tier::Shrimp => self.shrimp,
            Tier::Krill => self.krill,
            Tier::Plankton => self.plankton,
        }
    }
}

/// Interpolation bounds for intra-tier position scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionFactor {
    #[serde(default = "default_position_min")]
    pub min: f64,

    #[serde(default = "default_position_max")]
    pub max: f64,
}

fn default_position_min() -> f64 {
    0.9
}

fn default_position_max() -> f64 {
    1.1
}

impl Default for PositionFactor {
    fn default() -> Self {
        Self {
            min: default_position_min(),
            max: default_position_max(),
        }
    }
}

/// Scoring-stage knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Fraction of bench effective power counted into the absolute score
    #[serde(default = "default_bench_factor")]
    pub bench_factor: f64,

    /// Stability penalty per assumed active slot, as a share of the squad
    #[serde(default = "default_assumption_penalty")]
    pub assumption_penalty: f64,

    /// Score ratios within `1.0 ± band` count as an even matchup
    #[serde(default = "default_even_matchup_band")]
    pub even_matchup_band: f64,
}

fn default_bench_factor() -> f64 {
    0.25
}

fn default_assumption_penalty() -> f64 {
    0.5
}

fn default_even_matchup_band() -> f64 {
    0.05
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            bench_factor: default_bench_factor(),
            assumption_penalty: default_assumption_penalty(),
            even_matchup_band: default_even_matchup_band(),
        }
    }
}

/// Main engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcisConfig {
    /// Active slots per alliance
    #[serde(default = "default_active_squad_size")]
    pub active_squad_size: usize,

    /// Bench slots per alliance
    #[serde(default = "default_bench_size")]
    pub bench_size: usize,

    /// Cap on players considered per alliance
    #[serde(default = "default_max_analyzed_players")]
    pub max_analyzed_players: usize,

    /// Discount applied to floor power when fabricating synthetic players
    #[serde(default = "default_assumption_factor")]
    pub assumption_factor: f64,

    #[serde(default)]
    pub tiers: TierThresholds,

    #[serde(default)]
    pub weights: TierWeights,

    #[serde(default)]
    pub position_factor: PositionFactor,

    #[serde(default)]
    pub scoring: ScoringConfig,
}

fn default_active_squad_size() -> usize {
    30
}

fn default_bench_size() -> usize {
    10
}

fn default_max_analyzed_players() -> usize {
    50
}

fn default_assumption_factor() -> f64 {
    0.9
}

impl Default for AcisConfig {
    fn default() -> Self {
        Self {
            active_squad_size: default_active_squad_size(),
            bench_size: default_bench_size(),
            max_analyzed_players: default_max_analyzed_players(),
            assumption_factor: default_assumption_factor(),
            tiers: TierThresholds::default(),
            weights: TierWeights::default(),
            position_factor: PositionFactor::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl AcisConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AcisConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.active_squad_size == 0 {
            return Err(ConfigError::ValidationError(
                "Active squad size must be greater than 0".to_string(),
            ));
        }

        if self.max_analyzed_players < self.active_squad_size + self.bench_size {
            return Err(ConfigError::ValidationError(format!(
                "max_analyzed_players ({}) must cover active + bench ({})",
                self.max_analyzed_players,
                self.active_squad_size + self.bench_size
            )));
        }

        if self.assumption_factor <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Assumption factor must be positive".to_string(),
            ));
        }

        if self.position_factor.min >= self.position_factor.max {
            return Err(ConfigError::ValidationError(
                "Position factor min must be below max".to_string(),
            ));
        }

        let t = &self.tiers;
        let ascending = t.shrimp_min < t.piranha_min
            && t.piranha_min < t.shark_min
            && t.shark_min < t.whale_min
            && t.whale_min < t.mega_whale_min;
        if !ascending || t.shrimp_min <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Tier thresholds must be positive and strictly ascending".to_string(),
            ));
        }

        for tier in Tier::ALL {
            if self.weights.weight(tier) <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "Weight for tier {} must be positive",
                    tier
                )));
            }
        }

        Ok(())
    }
}
