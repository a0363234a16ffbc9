use std::sync::Arc;
use std::time::Instant;

use crate::{
    modules::plates::domain::{
        entities::PlateRecord,
        repositories::PlateRepository,
        value_objects::{CandidateStrategy, NormalizedQuery, ScoredCandidate},
    },
    shared::{
        application::{PaginatedResult, PaginationParams},
        errors::AppResult,
        utils::LogContext,
    },
};

use super::plate_search::{
    max_distance, NormalizedFields, PlateSearchConfig, QueryNormalizer, RelevanceScorer,
    SearchMetrics, StageTimer,
};

/// One page of ranked plates plus the total match count
pub type SearchResult = PaginatedResult<PlateRecord>;

/// Ranks the plate corpus against free-text queries
///
/// Holds no per-search state: every call normalizes, fetches, scores, sorts and
/// paginates on its own, so one instance can serve concurrent searches.
pub struct PlateSearchService {
    repository: Arc<dyn PlateRepository>,
    normalizer: QueryNormalizer,
    scorer: RelevanceScorer,
    enable_substring_prefilter: bool,
}

impl PlateSearchService {
    pub fn new(repository: Arc<dyn PlateRepository>, config: &PlateSearchConfig) -> Self {
        Self {
            repository,
            normalizer: QueryNormalizer::standard(),
            scorer: RelevanceScorer::new(),
            enable_substring_prefilter: config.enable_substring_prefilter,
        }
    }

    /// Search the corpus and return page `page` of size `limit`.
    ///
    /// `page >= 1` and `1 <= limit` are the caller's responsibility. A query that
    /// normalizes to empty matches nothing. Repository failures are returned as-is.
    pub async fn search(&self, raw_query: &str, page: u32, limit: u32) -> AppResult<SearchResult> {
        self.search_with_metrics(raw_query, page, limit)
            .await
            .map(|(result, _)| result)
    }

    /// Same as [`search`](Self::search), also reporting how the search went
    pub async fn search_with_metrics(
        &self,
        raw_query: &str,
        page: u32,
        limit: u32,
    ) -> AppResult<(SearchResult, SearchMetrics)> {
        let started = Instant::now();
        let mut metrics = SearchMetrics::new();
        let params = PaginationParams::new(page, limit);

        let timer = StageTimer::start("normalize");
        let query = self.normalizer.normalize_query(raw_query);
        timer.stop(&mut metrics);

        if query.is_empty() {
            log::debug!("Search: '{}' normalized to empty, skipping", raw_query);
            metrics.total_duration = started.elapsed();
            return Ok((SearchResult::empty(&params), metrics));
        }

        let max_distance = max_distance(query.char_len());
        let strategy = self.choose_strategy(&query, max_distance);
        metrics.max_distance = max_distance;
        metrics.strategy = Some(strategy);
        LogContext::search_operation(query.as_str(), Some(strategy.name()), None);

        let timer = StageTimer::start("fetch");
        let candidates = self.fetch_candidates(strategy, &query).await?;
        timer.stop(&mut metrics);
        metrics.candidate_count = candidates.len();

        let timer = StageTimer::start("score");
        let mut ranked = self.score_candidates(candidates, &query, max_distance);
        timer.stop(&mut metrics);

        let timer = StageTimer::start("sort");
        ranked.sort_by(ScoredCandidate::rank_cmp);
        timer.stop(&mut metrics);

        metrics.match_count = ranked.len();
        metrics.fuzzy_match_count = ranked
            .iter()
            .filter(|candidate| candidate.relevance.tier.is_fuzzy())
            .count();

        let timer = StageTimer::start("paginate");
        let plates = ranked.into_iter().map(|candidate| candidate.plate).collect();
        let result = SearchResult::from_ranked(plates, &params);
        timer.stop(&mut metrics);

        metrics.returned_count = result.data.len();
        metrics.total_duration = started.elapsed();

        log::debug!(
            "Search: '{}' max_distance={} candidates={} matches={} fuzzy={} page={} returned={}",
            query,
            max_distance,
            metrics.candidate_count,
            metrics.match_count,
            metrics.fuzzy_match_count,
            page,
            metrics.returned_count
        );

        Ok((result, metrics))
    }

    /// Pre-filter only when fuzzy matching is off and a raw substring test cannot
    /// miss a record that the normalized comparison would accept.
    fn choose_strategy(&self, query: &NormalizedQuery, max_distance: usize) -> CandidateStrategy {
        if self.enable_substring_prefilter && max_distance == 0 && query.is_prefilter_safe() {
            CandidateStrategy::SubstringPrefilter
        } else {
            CandidateStrategy::FullCorpus
        }
    }

    async fn fetch_candidates(
        &self,
        strategy: CandidateStrategy,
        query: &NormalizedQuery,
    ) -> AppResult<Vec<PlateRecord>> {
        let fetched = match strategy {
            CandidateStrategy::FullCorpus => self.repository.fetch_all().await,
            CandidateStrategy::SubstringPrefilter => {
                self.repository.fetch_containing(query.as_str()).await
            }
        };

        if let Err(ref e) = fetched {
            log::warn!(
                "Search: fetching candidates for '{}' via {} failed: {}",
                query,
                strategy.name(),
                e
            );
        }

        fetched
    }

    fn score_candidates(
        &self,
        candidates: Vec<PlateRecord>,
        query: &NormalizedQuery,
        max_distance: usize,
    ) -> Vec<ScoredCandidate> {
        candidates
            .into_iter()
            .filter_map(|plate| {
                let fields = NormalizedFields::from_plate(&plate, &self.normalizer);
                self.scorer
                    .score(query.as_str(), &fields, max_distance)
                    .map(|relevance| ScoredCandidate::new(plate, relevance))
            })
            .collect()
    }
}
