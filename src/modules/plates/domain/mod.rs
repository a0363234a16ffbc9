pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{NewPlateRecord, PlateRecord};
pub use repositories::PlateRepository;
pub use services::{PlateSearchConfig, PlateSearchService, SearchResult};
