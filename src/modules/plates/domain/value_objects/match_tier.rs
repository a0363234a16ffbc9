use serde::{Deserialize, Serialize};

/// Ordered match classes, best first
///
/// Every tier's score is strictly below the next tier's, and the fuzzy tier starts
/// above every non-fuzzy tier, so no edit distance can lift a fuzzy hit past a
/// substring hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Code equals the query
    ExactCode,
    /// Code starts with the query
    CodePrefix,
    /// City or state starts with the query
    PlacePrefix,
    /// Code contains the query
    CodeSubstring,
    /// City or state contains the query
    PlaceSubstring,
    /// Some field is within the allowed edit distance
    Fuzzy,
}

impl MatchTier {
    pub fn base_score(&self) -> f64 {
        match self {
            MatchTier::ExactCode => 0.0,
            MatchTier::CodePrefix => 1.0,
            MatchTier::PlacePrefix => 1.5,
            MatchTier::CodeSubstring => 2.0,
            MatchTier::PlaceSubstring => 2.5,
            MatchTier::Fuzzy => 3.0,
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        matches!(self, MatchTier::Fuzzy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchTier::ExactCode => "exact-code",
            MatchTier::CodePrefix => "code-prefix",
            MatchTier::PlacePrefix => "place-prefix",
            MatchTier::CodeSubstring => "code-substring",
            MatchTier::PlaceSubstring => "place-substring",
            MatchTier::Fuzzy => "fuzzy",
        }
    }
}
