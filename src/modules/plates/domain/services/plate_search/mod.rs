/// Plate search components: small, pure building blocks composed by
/// `PlateSearchService`.
///
/// # Architecture
///
/// - **Pipeline Pattern**: `QueryNormalizer` chains composable text transformations
/// - **Ordered Tiers**: `RelevanceScorer` evaluates match classes best-first
/// - **Step Policy**: `max_distance` widens fuzzy tolerance with query length
/// - **Configuration Pattern**: `PlateSearchConfig` for externalized settings
/// - **Metrics Pattern**: `SearchMetrics` for observability
///
/// # Usage
///
/// ```rust,ignore
/// let normalizer = QueryNormalizer::standard();
/// let query = normalizer.normalize_query("Köln");
///
/// let plate = PlateRecord::new("K", "Köln", None, "Nordrhein-Westfalen");
/// let fields = NormalizedFields::from_plate(&plate, &normalizer);
///
/// let relevance = RelevanceScorer::new().score(
///     query.as_str(),
///     &fields,
///     max_distance(query.char_len()),
/// );
/// ```
pub mod config;
pub mod edit_distance;
pub mod metrics;
pub mod query_normalizer;
pub mod relevance_scorer;
pub mod threshold_policy;

// Re-export main types
pub use config::{PlateSearchConfig, PlateSearchConfigBuilder};
pub use edit_distance::edit_distance;
pub use metrics::{SearchMetrics, StageTimer};
pub use query_normalizer::{
    CollapseWhitespaceTransform, LowercaseTransform, QueryNormalizer, TextTransformation,
    TransliterateUmlautsTransform, TrimTransform,
};
pub use relevance_scorer::{NormalizedFields, RelevanceScorer};
pub use threshold_policy::max_distance;
