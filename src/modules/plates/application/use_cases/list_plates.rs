use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    modules::plates::domain::{
        entities::PlateRecord, repositories::PlateRepository, value_objects::compare_codes,
    },
    shared::{application::Query, errors::AppResult, utils::TimedOperation},
};

/// Use case for listing the whole corpus, ordered by code
pub struct ListPlatesUseCase {
    repository: Arc<dyn PlateRepository>,
}

impl ListPlatesUseCase {
    pub fn new(repository: Arc<dyn PlateRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<(), Vec<PlateRecord>> for ListPlatesUseCase {
    async fn execute(&self, _query: ()) -> AppResult<Vec<PlateRecord>> {
        let timer = TimedOperation::new("list plates");

        let mut plates = self.repository.fetch_all().await?;
        plates.sort_by(|a, b| compare_codes(&a.code, &b.code));

        timer.finish_with_info(&format!("{} plates", plates.len()));
        Ok(plates)
    }
}
