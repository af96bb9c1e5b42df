//! Active-squad and bench selection.

use crate::config::AcisConfig;
use crate::models::{AllianceGroup, Player};

/// Rank one alliance's members by power and split them into an active
/// squad, a bench, and a count of unfilled active slots.
///
/// The sort is stable: ties keep their original relative order, so repeat
/// runs over the same roster produce identical output. The bench is only
/// populated when the active squad is fully real — an under-strength
/// alliance's extra players are not meaningful reserves while the frontline
/// itself has holes.
pub fn select_squads(
    alliance: String,
    warzone: String,
    members: Vec<Player>,
    warzone_floor_power: f64,
    config: &AcisConfig,
) -> AllianceGroup {
    let mut players_sorted = members;
    players_sorted.sort_by(|a, b| {
        b.total_power
            .partial_cmp(&a.total_power)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    players_sorted.truncate(config.max_analyzed_players);

    let active_len = players_sorted.len().min(config.active_squad_size);
    let active_real = players_sorted[..active_len].to_vec();
    let missing_active_count = config.active_squad_size - active_len;

    let bench_real = if missing_active_count == 0 {
        let bench_end = (active_len + config.bench_size).min(players_sorted.len());
        players_sorted[active_len..bench_end].to_vec()
    } else {
        Vec::new()
    };

    AllianceGroup {
        alliance,
        warzone,
        players_sorted,
        active_real,
        bench_real,
        missing_active_count,
        warzone_floor_power,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(active: usize, bench: usize, cap: usize) -> AcisConfig {
        AcisConfig {
            active_squad_size: active,
            bench_size: bench,
            max_analyzed_players: cap,
            ..Default::default()
        }
    }

    fn players(powers: &[f64]) -> Vec<Player> {
        powers
            .iter()
            .enumerate()
            .map(|(i, &p)| Player::new(format!("p{}", i), "X", p))
            .collect()
    }

    fn select(members: Vec<Player>, config: &AcisConfig) -> AllianceGroup {
        select_squads("X".to_string(), "wz-1".to_string(), members, 10.0, config)
    }

    #[test]
    fn test_full_squad_with_bench() {
        let config = config(5, 2, 10);
        let group = select(players(&[10.0, 50.0, 30.0, 20.0, 40.0, 5.0, 1.0]), &config);

        assert_eq!(group.active_real.len(), 5);
        assert_eq!(group.missing_active_count, 0);
        assert_eq!(group.bench_real.len(), 2);
        assert_eq!(group.active_real[0].total_power, 50.0);
        assert_eq!(group.bench_real[0].total_power, 5.0);
    }

    #[test]
    fn test_exactly_full_squad_no_bench() {
        let config = config(5, 2, 10);
        let group = select(players(&[10.0, 50.0, 30.0, 20.0, 40.0]), &config);

        assert_eq!(group.active_real.len(), 5);
        assert_eq!(group.missing_active_count, 0);
        assert!(group.bench_real.is_empty());
    }

    #[test]
    fn test_short_squad_forces_empty_bench() {
        let config = config(5, 2, 10);
        let group = select(players(&[10.0, 20.0, 30.0]), &config);

        assert_eq!(group.active_real.len(), 3);
        assert_eq!(group.missing_active_count, 2);
        assert!(group.bench_real.is_empty());
    }

    #[test]
    fn test_cap_truncates_before_slicing() {
        let config = config(2, 2, 3);
        let group = select(players(&[9.0, 8.0, 7.0, 6.0, 5.0]), &config);

        assert_eq!(group.players_sorted.len(), 3);
        assert_eq!(group.active_real.len(), 2);
        // Only one player left under the cap for the bench
        assert_eq!(group.bench_real.len(), 1);
        assert_eq!(group.bench_real[0].total_power, 7.0);
    }

    #[test]
    fn test_stable_sort_preserves_tie_order() {
        let config = config(3, 0, 10);
        let members = vec![
            Player::new("first", "X", 20.0),
            Player::new("second", "X", 20.0),
            Player::new("top", "X", 30.0),
        ];
        let group = select(members, &config);

        assert_eq!(group.active_real[0].name, "top");
        assert_eq!(group.active_real[1].name, "first");
        assert_eq!(group.active_real[2].name, "second");
    }

    #[test]
    fn test_empty_membership() {
        let config = config(5, 2, 10);
        let group = select(Vec::new(), &config);

        assert!(group.active_real.is_empty());
        assert_eq!(group.missing_active_count, 5);
        assert!(group.bench_real.is_empty());
    }
}
