pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    GetPlateRequest, GetPlateUseCase, ListPlatesUseCase, SearchPlatesRequest, SearchPlatesUseCase,
};
pub use domain::{
    NewPlateRecord, PlateRecord, PlateRepository, PlateSearchConfig, PlateSearchService,
    SearchResult,
};
pub use infrastructure::InMemoryPlateRepository;
