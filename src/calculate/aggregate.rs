//! Per-alliance aggregation of classified players.

use crate::config::AcisConfig;
use crate::models::{AllianceAggregate, AllianceGroup, ClassifiedPlayer, TierTally};

/// Classify one alliance's squads and accumulate effective power.
///
/// Order of accumulation: real active players, then one synthetic filler
/// per unfilled active slot, then the bench (when present). Tier counts
/// tally across active and bench together. Returns a new record; the input
/// group is never mutated.
pub fn aggregate_alliance(group: &AllianceGroup, config: &AcisConfig) -> AllianceAggregate {
    let mut active_players: Vec<ClassifiedPlayer> =
        Vec::with_capacity(config.active_squad_size);
    let mut bench_players: Vec<ClassifiedPlayer> = Vec::with_capacity(group.bench_real.len());
    let mut tier_counts = TierTally::new();
    let mut active_power = 0.0;
    let mut bench_power = 0.0;

    for player in &group.active_real {
        let classified = super::classify::classify_player(player, config);
        active_power += classified.effective_power;
        tier_counts.increment(classified.tier);
        active_players.push(classified);
    }

    for _ in 0..group.missing_active_count {
        let synth = super::classify::synthetic_player(group.warzone_floor_power, config);
        active_power += synth.effective_power;
        tier_counts.increment(synth.tier);
        active_players.push(synth);
    }

    for player in &group.bench_real {
        let classified = super::classify::classify_player(player, config);
        bench_power += classified.effective_power;
        tier_counts.increment(classified.tier);
        bench_players.push(classified);
    }

    AllianceAggregate {
        alliance: group.alliance.clone(),
        warzone: group.warzone.clone(),
        active_players,
        bench_players,
        active_power,
        bench_power,
        tier_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::squad::select_squads;
    use crate::models::{Player, Tier};

    fn group(powers: &[f64], active: usize, bench: usize, floor: f64) -> AllianceGroup {
        let members: Vec<Player> = powers
            .iter()
            .enumerate()
            .map(|(i, &p)| Player::new(format!("p{}", i), "X", p))
            .collect();
        let config = AcisConfig {
            active_squad_size: active,
            bench_size: bench,
            ..Default::default()
        };
        select_squads("X".to_string(), "wz-1".to_string(), members, floor, &config)
    }

    #[test]
    fn test_aggregate_fills_missing_slots() {
        let config = AcisConfig {
            active_squad_size: 5,
            bench_size: 2,
            ..Default::default()
        };
        let group = group(&[50_000_000.0, 30_000_000.0], 5, 2, 8_000_000.0);
        let agg = aggregate_alliance(&group, &config);

        assert_eq!(agg.active_players.len(), 5);
        assert_eq!(agg.assumed_count(), 3);
        assert_eq!(agg.tier_counts.count(Tier::Plankton), 3);
        assert!(agg.bench_players.is_empty());
    }

    #[test]
    fn test_aggregate_conservation() {
        let config = AcisConfig {
            active_squad_size: 3,
            bench_size: 2,
            ..Default::default()
        };
        let group = group(
            &[90_000_000.0, 50_000_000.0, 20_000_000.0, 10_000_000.0, 5_000_000.0],
            3,
            2,
            5_000_000.0,
        );
        let agg = aggregate_alliance(&group, &config);

        assert_eq!(
            agg.tier_counts.total() as usize,
            agg.active_players.len() + agg.bench_players.len()
        );
    }

    #[test]
    fn test_aggregate_sums_effective_power() {
        let config = AcisConfig {
            active_squad_size: 2,
            bench_size: 2,
            ..Default::default()
        };
        let group = group(&[50_000_000.0, 30_000_000.0, 14_000_000.0], 2, 2, 14_000_000.0);
        let agg = aggregate_alliance(&group, &config);

        let active_sum: f64 = agg.active_players.iter().map(|p| p.effective_power).sum();
        let bench_sum: f64 = agg.bench_players.iter().map(|p| p.effective_power).sum();
        assert!((agg.active_power - active_sum).abs() < 1e-6);
        assert!((agg.bench_power - bench_sum).abs() < 1e-6);
        assert_eq!(agg.bench_players.len(), 1);
    }

    #[test]
    fn test_aggregate_does_not_mutate_group() {
        let config = AcisConfig {
            active_squad_size: 3,
            bench_size: 1,
            ..Default::default()
        };
        let group = group(&[50_000_000.0], 3, 1, 7_000_000.0);
        let active_before = group.active_real.clone();

        let _ = aggregate_alliance(&group, &config);
        assert_eq!(group.active_real, active_before);
        assert_eq!(group.missing_active_count, 2);
    }

    #[test]
    fn test_synthetic_entries_marked_assumed() {
        let config = AcisConfig {
            active_squad_size: 2,
            bench_size: 0,
            ..Default::default()
        };
        let group = group(&[50_000_000.0], 2, 0, 6_000_000.0);
        let agg = aggregate_alliance(&group, &config);

        let synths: Vec<_> = agg.active_players.iter().filter(|p| p.assumed).collect();
        assert_eq!(synths.len(), 1);
        assert_eq!(synths[0].tier, Tier::Plankton);
        assert_eq!(synths[0].name, "Assumed");
    }
}
