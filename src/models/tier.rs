//! Power tier classification.

use serde::{Deserialize, Serialize};

/// Power bracket a player falls into.
///
/// Ordered strongest to weakest. `Plankton` is never assigned to a real
/// player; it is reserved for synthetic roster fillers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    MegaWhale,
    Whale,
    Shark,
    Piranha,
    Shrimp,
    Krill,
    Plankton,
}

impl Tier {
    /// All tiers, strongest first.
    pub const ALL: [Tier; 7] = [
        Tier::MegaWhale,
        Tier::Whale,
        Tier::Shark,
        Tier::Piranha,
        Tier::Shrimp,
        Tier::Krill,
        Tier::Plankton,
    ];

    /// Whether this tier is reserved for synthetic players.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Tier::Plankton)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::MegaWhale => write!(f, "Mega Whale"),
            Tier::Whale => write!(f, "Whale"),
            Tier::Shark => write!(f, "Shark"),
            Tier::Piranha => write!(f, "Piranha"),
            Tier::Shrimp => write!(f, "Shrimp"),
            Tier::Krill => write!(f, "Krill"),
            Tier::Plankton => write!(f, "Plankton"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering_strongest_first() {
        assert!(Tier::MegaWhale < Tier::Whale);
        assert!(Tier::Krill < Tier::Plankton);
        assert_eq!(Tier::ALL[0], Tier::MegaWhale);
        assert_eq!(Tier::ALL[6], Tier::Plankton);
    }

    #[test]
    fn test_tier_synthetic() {
        assert!(Tier::Plankton.is_synthetic());
        assert!(!Tier::Krill.is_synthetic());
        assert!(!Tier::MegaWhale.is_synthetic());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(format!("{}", Tier::MegaWhale), "Mega Whale");
        assert_eq!(format!("{}", Tier::Plankton), "Plankton");
    }

    #[test]
    fn test_tier_serialization() {
        let json = serde_json::to_string(&Tier::Shark).unwrap();
        assert_eq!(json, "\"Shark\"");
        let tier: Tier = serde_json::from_str(&json).unwrap();
        assert_eq!(tier, Tier::Shark);
    }
}
