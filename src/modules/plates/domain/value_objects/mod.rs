mod candidate_strategy;
mod match_tier;
mod normalized_query;
mod scored_candidate;

pub use candidate_strategy::CandidateStrategy;
pub use match_tier::MatchTier;
pub use normalized_query::NormalizedQuery;
pub use scored_candidate::{compare_codes, RelevanceMatch, ScoredCandidate};
