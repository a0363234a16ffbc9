pub mod modules;
pub mod shared;

use std::sync::Arc;

use modules::plates::{
    GetPlateUseCase, InMemoryPlateRepository, ListPlatesUseCase, PlateRepository,
    PlateSearchConfig, PlateSearchService, SearchPlatesUseCase,
};
use shared::{AppError, AppResult};

/// The plate search use cases wired over one shared repository
pub struct PlateSearchApp {
    pub config: PlateSearchConfig,
    pub search: SearchPlatesUseCase,
    pub list: ListPlatesUseCase,
    pub get: GetPlateUseCase,
}

impl PlateSearchApp {
    pub fn new(repository: Arc<dyn PlateRepository>, config: PlateSearchConfig) -> Self {
        let service = Arc::new(PlateSearchService::new(repository.clone(), &config));

        Self {
            search: SearchPlatesUseCase::new(service, &config),
            list: ListPlatesUseCase::new(repository.clone()),
            get: GetPlateUseCase::new(repository),
            config,
        }
    }

    /// Load the corpus named by `config.corpus_path` and wire the use cases
    pub fn load(config: PlateSearchConfig) -> AppResult<Self> {
        config.validate()?;

        let path = config.corpus_path.clone().ok_or_else(|| {
            AppError::ConfigError(
                "No corpus configured: set PLATES_CORPUS_PATH or pass --corpus".to_string(),
            )
        })?;

        let repository = Arc::new(InMemoryPlateRepository::from_json_file(&path)?);
        Ok(Self::new(repository, config))
    }
}
