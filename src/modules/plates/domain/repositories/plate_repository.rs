use async_trait::async_trait;
use uuid::Uuid;

use crate::{modules::plates::domain::entities::PlateRecord, shared::errors::AppResult};

/// Repository interface for the license plate corpus
/// The search engine only reads through this contract and never mutates the corpus
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlateRepository: Send + Sync {
    /// Return every plate in the corpus
    async fn fetch_all(&self) -> AppResult<Vec<PlateRecord>>;

    /// Return plates whose raw code, city or state contains `substring`, ignoring case
    ///
    /// Fields are compared as stored: no umlaut transliteration or whitespace folding.
    async fn fetch_containing(&self, substring: &str) -> AppResult<Vec<PlateRecord>>;

    /// Get a plate by its id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PlateRecord>>;

    /// Get a plate by its exact code
    async fn find_by_code(&self, code: &str) -> AppResult<Option<PlateRecord>>;
}
