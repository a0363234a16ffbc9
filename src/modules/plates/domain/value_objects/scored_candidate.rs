use std::cmp::Ordering;

use crate::modules::plates::domain::{entities::PlateRecord, value_objects::MatchTier};

/// Outcome of scoring one candidate against a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceMatch {
    pub tier: MatchTier,
    /// Edit distance that qualified a fuzzy match; `None` for every other tier
    pub distance: Option<usize>,
}

impl RelevanceMatch {
    pub fn exact(tier: MatchTier) -> Self {
        Self {
            tier,
            distance: None,
        }
    }

    pub fn fuzzy(distance: usize) -> Self {
        Self {
            tier: MatchTier::Fuzzy,
            distance: Some(distance),
        }
    }

    /// Lower is better
    pub fn score(&self) -> f64 {
        self.tier.base_score() + self.distance.unwrap_or(0) as f64
    }
}

/// A plate paired with its relevance, alive only while one search sorts its results
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub plate: PlateRecord,
    pub relevance: RelevanceMatch,
}

impl ScoredCandidate {
    pub fn new(plate: PlateRecord, relevance: RelevanceMatch) -> Self {
        Self { plate, relevance }
    }

    pub fn score(&self) -> f64 {
        self.relevance.score()
    }

    /// Total ranking order: score, then code in collation order, then id.
    ///
    /// Codes are unique in a well-formed corpus; the id comparison only keeps the
    /// order total when they are not.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score()
            .total_cmp(&other.score())
            .then_with(|| compare_codes(&self.plate.code, &other.plate.code))
            .then_with(|| self.plate.id.cmp(&other.plate.id))
    }
}

/// Compare plate codes the way a German-locale collation orders them:
/// umlauts sort with their base letter and case is only a tie-breaker.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| invert_case(a).cmp(&invert_case(b)))
}

/// Lowercase sorts before uppercase at the case tie-break
fn invert_case(code: &str) -> String {
    code.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn collation_key(code: &str) -> String {
    code.chars()
        .flat_map(char::to_lowercase)
        .flat_map(|c| match c {
            'ä' => ['a', '\0'],
            'ö' => ['o', '\0'],
            'ü' => ['u', '\0'],
            'ß' => ['s', 's'],
            other => [other, '\0'],
        })
        .filter(|c| *c != '\0')
        .collect()
}
