use crate::shared::errors::AppResult;
/// Base trait for read-only query handlers
///
/// Every plate lookup is a query: it reads from the repository and never mutates it.
///
/// # Example
///
/// ```rust,ignore
/// struct ListPlatesUseCase {
///     repository: Arc<dyn PlateRepository>,
/// }
///
/// #[async_trait]
/// impl Query<(), Vec<PlateRecord>> for ListPlatesUseCase {
///     async fn execute(&self, _query: ()) -> AppResult<Vec<PlateRecord>> {
///         // Query logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
