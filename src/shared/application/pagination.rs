/// Pagination support for queries
///
/// Standard pagination model shared by every paged query
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl PaginationParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Resolve pagination from raw query-string values.
    ///
    /// A value that does not start with an integer, or parses to zero, falls back to
    /// its default. When neither value is supplied the caller wants everything, so
    /// the limit becomes `defaults.unpaginated_limit`.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        defaults: &PaginationDefaults,
    ) -> AppResult<Self> {
        if page.is_none() && limit.is_none() {
            let params = Self::new(1, defaults.unpaginated_limit);
            params.validate(defaults.max_limit)?;
            return Ok(params);
        }

        let page = page.and_then(parse_leading_int).unwrap_or(1);
        let limit = limit
            .and_then(parse_leading_int)
            .unwrap_or(i64::from(defaults.default_limit));

        if page < 1 || page > i64::from(u32::MAX) {
            return Err(AppError::ValidationError(
                "Page must be greater than 0".to_string(),
            ));
        }
        if limit < 1 || limit > i64::from(defaults.max_limit) {
            return Err(AppError::ValidationError(format!(
                "Limit must be between 1 and {}",
                defaults.max_limit
            )));
        }

        Ok(Self::new(page as u32, limit as u32))
    }

    /// Check the bounds the search core relies on
    pub fn validate(&self, max_limit: u32) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::ValidationError(
                "Page must be greater than 0".to_string(),
            ));
        }
        if self.limit < 1 || self.limit > max_limit {
            return Err(AppError::ValidationError(format!(
                "Limit must be between 1 and {}",
                max_limit
            )));
        }
        Ok(())
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (u64::from(self.page.saturating_sub(1)) * u64::from(self.limit))
            .try_into()
            .unwrap_or(usize::MAX)
    }
}

/// Defaults and bounds used when resolving raw pagination input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationDefaults {
    pub default_limit: u32,
    pub unpaginated_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            default_limit: 20,
            unpaginated_limit: 10000,
            max_limit: 10000,
        }
    }
}

/// Paginated result wrapper
///
/// Serialized as `{ "data": [...], "total": n, "page": n, "limit": n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, total: u64, params: &PaginationParams) -> Self {
        Self {
            data,
            total,
            page: params.page,
            limit: params.limit,
        }
    }

    pub fn empty(params: &PaginationParams) -> Self {
        Self::new(Vec::new(), 0, params)
    }

    /// Cut the page described by `params` out of a fully ranked list
    pub fn from_ranked(ranked: Vec<T>, params: &PaginationParams) -> Self {
        let total = ranked.len() as u64;
        let data = ranked
            .into_iter()
            .skip(params.offset())
            .take(params.limit as usize)
            .collect();

        Self::new(data, total, params)
    }

    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

/// Parse an optionally signed integer prefix, ignoring anything after the digits.
///
/// Returns `None` for no digits and for zero, which callers treat as "use the default".
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -value } else { value };

    (value != 0).then_some(value)
}
