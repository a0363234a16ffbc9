use serde::{Deserialize, Serialize};

/// Request DTO for a plate search
///
/// Pagination values stay raw strings until the use case resolves them, so that
/// `"2abc"`, `"0"` and a missing value can each get their own treatment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlatesRequest {
    /// Free-text query; `None` or `""` is rejected
    pub query: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
}

impl SearchPlatesRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            page: None,
            limit: None,
        }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}
