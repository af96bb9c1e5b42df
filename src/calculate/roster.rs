//! Roster grouping and floor-power computation.

use std::collections::HashMap;

use tracing::debug;

use crate::models::Player;

use super::AnalysisError;

/// Check that every player in the batch belongs to the same warzone and
/// return it.
///
/// The first-seen value is authoritative; any later disagreement is fatal.
/// Callers holding multi-warzone data must partition before invoking the
/// pipeline. An empty batch yields an empty warzone.
pub fn ensure_single_warzone(players: &[Player]) -> Result<String, AnalysisError> {
    let mut first: Option<&str> = None;

    for player in players {
        match first {
            None => first = Some(&player.warzone),
            Some(seen) if seen != player.warzone => {
                return Err(AnalysisError::MixedWarzones {
                    first: seen.to_string(),
                    other: player.warzone.clone(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(first.unwrap_or_default().to_string())
}

/// Smallest raw power strictly greater than zero across the whole batch.
///
/// Returns 0.0 when no player has positive power (empty or all-zero input).
/// This is a global floor shared by every alliance built from the batch:
/// understrength rosters are padded using the server-wide weakest real
/// player, not their own weakest member.
pub fn warzone_floor(players: &[Player]) -> f64 {
    players
        .iter()
        .map(|p| p.total_power)
        .filter(|&power| power > 0.0)
        .fold(0.0, |floor, power| {
            if floor == 0.0 || power < floor {
                power
            } else {
                floor
            }
        })
}

/// Partition players by alliance tag, preserving first-occurrence order.
///
/// Players with an empty alliance are silently dropped. Order of groups is
/// not semantically significant downstream; preserving it keeps runs
/// reproducible.
pub fn group_by_alliance(players: &[Player]) -> Vec<(String, Vec<Player>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Player>)> = Vec::new();

    for player in players {
        if player.alliance.is_empty() {
            debug!("Dropping unaffiliated player: {}", player.name);
            continue;
        }

        match index.get(&player.alliance) {
            Some(&i) => groups[i].1.push(player.clone()),
            None => {
                index.insert(player.alliance.clone(), groups.len());
                groups.push((player.alliance.clone(), vec![player.clone()]));
            }
        }
    }

    groups
}
