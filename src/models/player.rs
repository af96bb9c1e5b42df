//! Player roster models.

use serde::{Deserialize, Serialize};

use super::Tier;

/// A raw roster entry as supplied by the data-loading collaborator.
///
/// The pipeline treats this as immutable input; every derived record is a
/// new value. `total_power` defaults to 0 when missing, which keeps the
/// player in the roster for sorting but excludes them from floor-power
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,

    /// Alliance tag. Empty means unaffiliated; such players are dropped
    /// from grouping.
    #[serde(default)]
    pub alliance: String,

    /// Warzone (server shard) this player belongs to
    #[serde(default)]
    pub warzone: String,

    /// Raw combat power
    #[serde(default)]
    pub total_power: f64,
}

impl Player {
    /// Create a new player record.
    pub fn new(name: impl Into<String>, alliance: impl Into<String>, total_power: f64) -> Self {
        Self {
            name: name.into(),
            alliance: alliance.into(),
            warzone: String::new(),
            total_power,
        }
    }

    /// Builder method to set the warzone.
    pub fn with_warzone(mut self, warzone: impl Into<String>) -> Self {
        self.warzone = warzone.into();
        self
    }
}

/// A player after tier classification and effective-power weighting.
///
/// Either derived from a real `Player` or fabricated to fill an unfilled
/// active slot (`assumed == true`, tier always `Plankton`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPlayer {
    /// Display name ("Assumed" for synthetic fillers)
    pub name: String,

    /// Assigned power tier
    pub tier: Tier,

    /// Raw combat power
    pub raw_power: f64,

    /// Tier-weighted power used for scoring
    pub effective_power: f64,

    /// Whether this entry is a synthetic filler rather than a real player
    pub assumed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_builder() {
        let player = Player::new("Kratos", "WOLF", 42_000_000.0).with_warzone("wz-881");
        assert_eq!(player.name, "Kratos");
        assert_eq!(player.alliance, "WOLF");
        assert_eq!(player.warzone, "wz-881");
        assert_eq!(player.total_power, 42_000_000.0);
    }

    #[test]
    fn test_player_missing_fields_default() {
        let player: Player = serde_json::from_str(r#"{"name":"Ghost"}"#).unwrap();
        assert_eq!(player.name, "Ghost");
        assert_eq!(player.alliance, "");
        assert_eq!(player.warzone, "");
        assert_eq!(player.total_power, 0.0);
    }

    #[test]
    fn test_classified_player_serialization() {
        let cp = ClassifiedPlayer {
            name: "Kratos".to_string(),
            tier: Tier::Shark,
            raw_power: 42_000_000.0,
            effective_power: 52_500_000.0,
            assumed: false,
        };

        let json = serde_json::to_string(&cp).unwrap();
        let back: ClassifiedPlayer = serde_json::from_str(&json).unwrap();
        assert_eq!(cp, back);
    }
}
