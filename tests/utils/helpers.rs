/// Test helper functions and service builders
use plate_search_lib::modules::plates::{
    domain::services::PlateSearchConfigBuilder, InMemoryPlateRepository, PlateRecord,
    PlateSearchConfig, PlateSearchService,
};
use plate_search_lib::PlateSearchApp;
use std::sync::Arc;

pub fn build_repository(plates: Vec<PlateRecord>) -> Arc<InMemoryPlateRepository> {
    Arc::new(InMemoryPlateRepository::new(plates).expect("test corpus has unique codes"))
}

/// Search service with the production configuration
pub fn build_service(plates: Vec<PlateRecord>) -> PlateSearchService {
    PlateSearchService::new(build_repository(plates), &PlateSearchConfig::default())
}

/// Search service that always scores the full corpus
pub fn build_unfiltered_service(plates: Vec<PlateRecord>) -> PlateSearchService {
    let config = PlateSearchConfigBuilder::new()
        .enable_substring_prefilter(false)
        .build()
        .expect("valid config");
    PlateSearchService::new(build_repository(plates), &config)
}

pub fn build_app(plates: Vec<PlateRecord>) -> PlateSearchApp {
    PlateSearchApp::new(build_repository(plates), PlateSearchConfig::default())
}

pub fn codes(plates: &[PlateRecord]) -> Vec<&str> {
    plates.iter().map(|p| p.code.as_str()).collect()
}
