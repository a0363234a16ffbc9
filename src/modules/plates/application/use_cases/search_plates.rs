use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    modules::plates::domain::services::{
        PlateSearchConfig, PlateSearchService, SearchMetrics, SearchResult,
    },
    shared::{
        application::{PaginationDefaults, PaginationParams, Query},
        errors::{AppError, AppResult},
        utils::{LogContext, TimedOperation},
    },
};

use super::super::dto::SearchPlatesRequest;

/// Use case for searching plates from raw request input
pub struct SearchPlatesUseCase {
    service: Arc<PlateSearchService>,
    defaults: PaginationDefaults,
}

impl SearchPlatesUseCase {
    pub fn new(service: Arc<PlateSearchService>, config: &PlateSearchConfig) -> Self {
        Self {
            service,
            defaults: config.pagination_defaults(),
        }
    }

    /// Validate the request, run the search and keep its metrics
    pub async fn execute_with_metrics(
        &self,
        request: SearchPlatesRequest,
    ) -> AppResult<(SearchResult, SearchMetrics)> {
        let query = match request.query.as_deref() {
            Some(query) if !query.is_empty() => query,
            _ => {
                return Err(AppError::InvalidInput(
                    "Query parameter required".to_string(),
                ))
            }
        };

        let params = PaginationParams::from_raw(
            request.page.as_deref(),
            request.limit.as_deref(),
            &self.defaults,
        )?;

        let timer = TimedOperation::new("plate search");
        let (result, metrics) = self
            .service
            .search_with_metrics(query, params.page, params.limit)
            .await?;

        timer.finish_with_info(&format!(
            "page {}/{}, {} of {} results",
            result.page,
            result.total_pages(),
            result.data.len(),
            result.total
        ));
        LogContext::search_operation(query, metrics.strategy.map(|s| s.name()), Some(result.total));

        Ok((result, metrics))
    }
}

#[async_trait]
impl Query<SearchPlatesRequest, SearchResult> for SearchPlatesUseCase {
    async fn execute(&self, request: SearchPlatesRequest) -> AppResult<SearchResult> {
        self.execute_with_metrics(request)
            .await
            .map(|(result, _)| result)
    }
}
