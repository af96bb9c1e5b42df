//! Tier classification, effective power, and synthetic fillers.

use crate::config::AcisConfig;
use crate::models::{ClassifiedPlayer, Player, Tier};

/// Display name carried by every synthetic filler.
pub const ASSUMED_NAME: &str = "Assumed";

/// Map a raw power value to its tier.
///
/// Ordered cascade from the highest threshold down; Krill is the catch-all
/// floor tier. Total over all non-negative powers, no error cases.
pub fn classify_power(power: f64, config: &AcisConfig) -> Tier {
    let t = &config.tiers;
    if power >= t.mega_whale_min {
        Tier::MegaWhale
    } else if power >= t.whale_min {
        Tier::Whale
    } else if power >= t.shark_min {
        Tier::Shark
    } else if power >= t.piranha_min {
        Tier::Piranha
    } else if power >= t.shrimp_min {
        Tier::Shrimp
    } else {
        Tier::Krill
    }
}

/// Intra-tier position factor.
///
/// For tiers with a `[min, max)` range, the position ratio is linearly
/// interpolated between the configured factor bounds. The ratio is not
/// clamped: a power above the tier's max extrapolates the factor past the
/// upper bound. Tiers without a range (Mega Whale, Krill, Plankton) get 1.
pub fn position_factor(power: f64, tier: Tier, config: &AcisConfig) -> f64 {
    let Some((min, max)) = config.tiers.range(tier) else {
        return 1.0;
    };

    let ratio = (power - min) / (max - min);
    let pf = &config.position_factor;
    pf.min + ratio * (pf.max - pf.min)
}

/// Classify a real player and compute their effective power.
pub fn classify_player(player: &Player, config: &AcisConfig) -> ClassifiedPlayer {
    let tier = classify_power(player.total_power, config);
    let factor = position_factor(player.total_power, tier, config);
    let effective_power = player.total_power * config.weights.weight(tier) * factor;

    ClassifiedPlayer {
        name: player.name.clone(),
        tier,
        raw_power: player.total_power,
        effective_power,
        assumed: false,
    }
}

/// Fabricate one synthetic Plankton filler for an unfilled active slot.
///
/// Models the pessimistic assumption that the slot is held by the weakest
/// plausible real player on the server, discounted by the assumption
/// factor. No position interpolation applies; the factor is fixed at 1.
pub fn synthetic_player(warzone_floor_power: f64, config: &AcisConfig) -> ClassifiedPlayer {
    let raw_power = warzone_floor_power * config.assumption_factor;

    ClassifiedPlayer {
        name: ASSUMED_NAME.to_string(),
        tier: Tier::Plankton,
        raw_power,
        effective_power: raw_power * config.weights.plankton,
        assumed: true,
    }
}
