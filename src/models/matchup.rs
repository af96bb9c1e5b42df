//! Pairwise matchup models.

use serde::{Deserialize, Serialize};

/// Which side of a matchup the score ratio favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchupVerdict {
    /// Scores within the configured even-matchup band of each other
    Even,
    FavorsA,
    FavorsB,
}

impl std::fmt::Display for MatchupVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchupVerdict::Even => write!(f, "even"),
            MatchupVerdict::FavorsA => write!(f, "favors A"),
            MatchupVerdict::FavorsB => write!(f, "favors B"),
        }
    }
}

/// A simulated matchup between two scored alliances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    /// First alliance (higher-ranked of the pair)
    pub alliance_a: String,

    /// Second alliance
    pub alliance_b: String,

    /// score(A) / score(B)
    pub ratio: f64,

    /// Which side the ratio favors
    pub verdict: MatchupVerdict,
}

impl Matchup {
    /// Name of the favored alliance, if the matchup is not even.
    pub fn favored(&self) -> Option<&str> {
        match self.verdict {
            MatchupVerdict::Even => None,
            MatchupVerdict::FavorsA => Some(&self.alliance_a),
            MatchupVerdict::FavorsB => Some(&self.alliance_b),
        }
    }

    /// Whether the given alliance participates in this matchup.
    pub fn involves(&self, alliance: &str) -> bool {
        self.alliance_a == alliance || self.alliance_b == alliance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matchup(verdict: MatchupVerdict) -> Matchup {
        Matchup {
            alliance_a: "WOLF".to_string(),
            alliance_b: "BEAR".to_string(),
            ratio: 1.3,
            verdict,
        }
    }

    #[test]
    fn test_matchup_favored() {
        assert_eq!(matchup(MatchupVerdict::FavorsA).favored(), Some("WOLF"));
        assert_eq!(matchup(MatchupVerdict::FavorsB).favored(), Some("BEAR"));
        assert_eq!(matchup(MatchupVerdict::Even).favored(), None);
    }

    #[test]
    fn test_matchup_involves() {
        let m = matchup(MatchupVerdict::Even);
        assert!(m.involves("WOLF"));
        assert!(m.involves("BEAR"));
        assert!(!m.involves("HAWK"));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(format!("{}", MatchupVerdict::Even), "even");
        assert_eq!(format!("{}", MatchupVerdict::FavorsA), "favors A");
    }
}
