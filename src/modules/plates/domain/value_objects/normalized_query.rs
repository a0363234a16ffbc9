use std::fmt;

/// Characters the normalizer can introduce into a field that a raw,
/// case-insensitive substring test would not see (digraph letters and the
/// single space left after collapsing whitespace).
const NORMALIZATION_SENSITIVE: [char; 5] = ['a', 'e', 'o', 'u', 's'];

/// A query in normalized form: trimmed, transliterated, whitespace-collapsed, lowercase
///
/// Recomputed for every search; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Wrap a string that has already been through the normalizer
    pub fn new(normalized: impl Into<String>) -> Self {
        Self(normalized.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, which is what the fuzzy threshold is keyed on
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether a raw substring pre-filter on this query returns every record the
    /// normalized comparison would accept.
    pub fn is_prefilter_safe(&self) -> bool {
        !self
            .0
            .chars()
            .any(|c| c.is_whitespace() || NORMALIZATION_SENSITIVE.contains(&c))
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
