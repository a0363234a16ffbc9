use crate::modules::plates::domain::{
    entities::PlateRecord,
    value_objects::{MatchTier, RelevanceMatch},
};

use super::edit_distance::edit_distance;
use super::query_normalizer::QueryNormalizer;

/// The searchable fields of a plate, in normalized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub code: String,
    pub city: String,
    pub state: String,
}

impl NormalizedFields {
    pub fn new(code: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn from_plate(plate: &PlateRecord, normalizer: &QueryNormalizer) -> Self {
        Self {
            code: normalizer.normalize(&plate.code),
            city: normalizer.normalize(&plate.city),
            state: normalizer.normalize(&plate.state),
        }
    }
}

type TierCheck = fn(&str, &NormalizedFields) -> bool;

/// Non-fuzzy tiers in evaluation order; the first that holds wins
const ORDERED_TIERS: [(MatchTier, TierCheck); 5] = [
    (MatchTier::ExactCode, is_exact_code),
    (MatchTier::CodePrefix, is_code_prefix),
    (MatchTier::PlacePrefix, is_place_prefix),
    (MatchTier::CodeSubstring, is_code_substring),
    (MatchTier::PlaceSubstring, is_place_substring),
];

fn is_exact_code(query: &str, fields: &NormalizedFields) -> bool {
    fields.code == query
}

fn is_code_prefix(query: &str, fields: &NormalizedFields) -> bool {
    fields.code.starts_with(query)
}

fn is_place_prefix(query: &str, fields: &NormalizedFields) -> bool {
    fields.city.starts_with(query) || fields.state.starts_with(query)
}

fn is_code_substring(query: &str, fields: &NormalizedFields) -> bool {
    fields.code.contains(query)
}

fn is_place_substring(query: &str, fields: &NormalizedFields) -> bool {
    fields.city.contains(query) || fields.state.contains(query)
}

/// Assigns a tiered relevance to a plate for a normalized query
///
/// Both the query and the fields must already be normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer;

impl RelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `fields` against `query`, or `None` when the plate does not match.
    ///
    /// Fuzzy matching is attempted only when `max_distance > 0`, using the closest
    /// of code, city and state.
    pub fn score(
        &self,
        query: &str,
        fields: &NormalizedFields,
        max_distance: usize,
    ) -> Option<RelevanceMatch> {
        if let Some((tier, _)) = ORDERED_TIERS.iter().find(|(_, check)| check(query, fields)) {
            return Some(RelevanceMatch::exact(*tier));
        }

        if max_distance == 0 {
            return None;
        }

        let distance = [&fields.code, &fields.city, &fields.state]
            .into_iter()
            .map(|field| edit_distance(query, field))
            .min()
            .unwrap_or(usize::MAX);

        (distance <= max_distance).then(|| RelevanceMatch::fuzzy(distance))
    }
}
