use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{log_debug, log_info};
use crate::modules::plates::domain::{
    entities::{NewPlateRecord, PlateRecord},
    repositories::PlateRepository,
};
use crate::shared::{
    errors::{AppError, AppResult},
    utils::LogContext,
};

const SOURCE: &str = "in-memory corpus";

/// Plate repository over a corpus held in memory
///
/// Cloning is cheap and clones share the same records.
#[derive(Debug, Clone)]
pub struct InMemoryPlateRepository {
    plates: Arc<Vec<PlateRecord>>,
}

impl InMemoryPlateRepository {
    /// Build a repository from records, rejecting duplicate codes or ids
    pub fn new(plates: Vec<PlateRecord>) -> AppResult<Self> {
        let mut codes = HashSet::with_capacity(plates.len());
        let mut ids = HashSet::with_capacity(plates.len());

        for plate in &plates {
            if !codes.insert(plate.code.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate plate code: {}",
                    plate.code
                )));
            }
            if !ids.insert(plate.id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate plate id: {}",
                    plate.id
                )));
            }
        }

        Ok(Self {
            plates: Arc::new(plates),
        })
    }

    /// Parse seed data: a JSON array of `{ id?, code, city, region?, state }`
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let seed: Vec<NewPlateRecord> = serde_json::from_str(json)?;
        log_debug!("Parsed {} seed records", seed.len());
        Self::new(seed.into_iter().map(PlateRecord::from).collect())
    }

    /// Load seed data from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let repository = Self::from_json_str(&json)?;

        log_info!(
            "Loaded {} plates from {}",
            repository.len(),
            path.display()
        );

        Ok(repository)
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}

#[async_trait]
impl PlateRepository for InMemoryPlateRepository {
    async fn fetch_all(&self) -> AppResult<Vec<PlateRecord>> {
        LogContext::repository_operation("fetch_all", SOURCE, Some(self.plates.len()));
        Ok(self.plates.as_ref().clone())
    }

    async fn fetch_containing(&self, substring: &str) -> AppResult<Vec<PlateRecord>> {
        let needle = substring.to_lowercase();
        let matches: Vec<PlateRecord> = self
            .plates
            .iter()
            .filter(|plate| {
                [&plate.code, &plate.city, &plate.state]
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        LogContext::repository_operation("fetch_containing", SOURCE, Some(matches.len()));
        Ok(matches)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PlateRecord>> {
        Ok(self.plates.iter().find(|plate| plate.id == id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<PlateRecord>> {
        Ok(self.plates.iter().find(|plate| plate.code == code).cloned())
    }
}
