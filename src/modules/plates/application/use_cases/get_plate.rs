use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    modules::plates::domain::{entities::PlateRecord, repositories::PlateRepository},
    shared::{
        application::Query,
        errors::{AppError, AppResult},
    },
};

use super::super::dto::GetPlateRequest;

/// Use case for fetching one plate by id or code
pub struct GetPlateUseCase {
    repository: Arc<dyn PlateRepository>,
}

impl GetPlateUseCase {
    pub fn new(repository: Arc<dyn PlateRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<GetPlateRequest, PlateRecord> for GetPlateUseCase {
    async fn execute(&self, request: GetPlateRequest) -> AppResult<PlateRecord> {
        match request {
            GetPlateRequest::ById(raw_id) => {
                let id = Uuid::parse_str(raw_id.trim())?;
                self.repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Plate with id {} not found", id)))
            }
            GetPlateRequest::ByCode(code) => self
                .repository
                .find_by_code(&code)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Plate with code {} not found", code))),
        }
    }
}
