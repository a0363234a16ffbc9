use std::env;
use std::path::PathBuf;

use crate::shared::{
    application::PaginationDefaults,
    errors::{AppError, AppResult},
};

/// Configuration for plate search
///
/// Externalizes page sizes and retrieval switches so they can be tuned per
/// deployment and pinned in tests.
#[derive(Debug, Clone)]
pub struct PlateSearchConfig {
    /// Page size used when a caller gives a page but no usable limit
    pub default_page_size: u32,

    /// Largest page size a caller may request
    pub max_page_size: u32,

    /// Page size used when a caller gives neither page nor limit
    pub unpaginated_limit: u32,

    /// Allow the repository substring pre-filter for queries too short for fuzzy matching
    pub enable_substring_prefilter: bool,

    /// Seed JSON file holding the corpus
    pub corpus_path: Option<PathBuf>,
}

impl PlateSearchConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 10_000,
            unpaginated_limit: 10_000,
            enable_substring_prefilter: true,
            corpus_path: None,
        }
    }

    /// Load configuration from the environment (and `.env`, when present)
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new();

        if let Some(path) = read_var("PLATES_CORPUS_PATH") {
            config.corpus_path = Some(PathBuf::from(path));
        }
        if let Some(value) = read_var("PLATES_DEFAULT_PAGE_SIZE") {
            config.default_page_size = parse_u32("PLATES_DEFAULT_PAGE_SIZE", &value)?;
        }
        if let Some(value) = read_var("PLATES_MAX_PAGE_SIZE") {
            config.max_page_size = parse_u32("PLATES_MAX_PAGE_SIZE", &value)?;
        }
        if let Some(value) = read_var("PLATES_UNPAGINATED_LIMIT") {
            config.unpaginated_limit = parse_u32("PLATES_UNPAGINATED_LIMIT", &value)?;
        }
        if let Some(value) = read_var("PLATES_SUBSTRING_PREFILTER") {
            config.enable_substring_prefilter = parse_bool("PLATES_SUBSTRING_PREFILTER", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.max_page_size == 0 {
            return Err(AppError::ConfigError(
                "max_page_size must be > 0".to_string(),
            ));
        }

        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(AppError::ConfigError(format!(
                "default_page_size ({}) must be between 1 and {}",
                self.default_page_size, self.max_page_size
            )));
        }

        if self.unpaginated_limit == 0 || self.unpaginated_limit > self.max_page_size {
            return Err(AppError::ConfigError(format!(
                "unpaginated_limit ({}) must be between 1 and {}",
                self.unpaginated_limit, self.max_page_size
            )));
        }

        Ok(())
    }

    pub fn pagination_defaults(&self) -> PaginationDefaults {
        PaginationDefaults {
            default_limit: self.default_page_size,
            unpaginated_limit: self.unpaginated_limit,
            max_limit: self.max_page_size,
        }
    }
}

impl Default for PlateSearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_u32(name: &str, value: &str) -> AppResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| AppError::ConfigError(format!("{} must be a positive integer: {}", name, e)))
}

fn parse_bool(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

/// Builder for PlateSearchConfig to make test setup easier
#[derive(Default)]
pub struct PlateSearchConfigBuilder {
    config: PlateSearchConfig,
}

impl PlateSearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: PlateSearchConfig::new(),
        }
    }

    pub fn default_page_size(mut self, size: u32) -> Self {
        self.config.default_page_size = size;
        self
    }

    pub fn max_page_size(mut self, size: u32) -> Self {
        self.config.max_page_size = size;
        self
    }

    pub fn unpaginated_limit(mut self, limit: u32) -> Self {
        self.config.unpaginated_limit = limit;
        self
    }

    pub fn enable_substring_prefilter(mut self, enable: bool) -> Self {
        self.config.enable_substring_prefilter = enable;
        self
    }

    pub fn corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.corpus_path = Some(path.into());
        self
    }

    pub fn build(self) -> AppResult<PlateSearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
