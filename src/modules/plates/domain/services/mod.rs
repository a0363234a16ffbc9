pub mod plate_search;
pub mod plate_search_service;

pub use plate_search::{PlateSearchConfig, PlateSearchConfigBuilder, SearchMetrics};
pub use plate_search_service::{PlateSearchService, SearchResult};
