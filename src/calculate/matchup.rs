//! Pairwise matchup simulation over scored alliances.

use crate::models::{Matchup, MatchupVerdict, ScoredAlliance};

/// Build all unordered pairs of scored alliances.
///
/// Expects `alliances` in rank order; side A of each pair is the
/// higher-ranked alliance. The ratio is `score(A) / score(B)` with a
/// guarded zero denominator (a pair of zero-score alliances counts as
/// even).
pub fn build_matchups(alliances: &[ScoredAlliance], even_band: f64) -> Vec<Matchup> {
    let mut matchups = Vec::new();

    for (i, a) in alliances.iter().enumerate() {
        for b in &alliances[i + 1..] {
            let ratio = score_ratio(a.score(), b.score());
            matchups.push(Matchup {
                alliance_a: a.alliance.clone(),
                alliance_b: b.alliance.clone(),
                ratio,
                verdict: verdict_for(ratio, even_band),
            });
        }
    }

    matchups
}

fn score_ratio(score_a: f64, score_b: f64) -> f64 {
    if score_b > 0.0 {
        score_a / score_b
    } else if score_a > 0.0 {
        f64::MAX
    } else {
        1.0
    }
}

fn verdict_for(ratio: f64, even_band: f64) -> MatchupVerdict {
    if (ratio - 1.0).abs() <= even_band {
        MatchupVerdict::Even
    } else if ratio > 1.0 {
        MatchupVerdict::FavorsA
    } else {
        MatchupVerdict::FavorsB
    }
}
