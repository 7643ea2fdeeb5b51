pub mod list;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scores::requests::{ScoreEntry, ScoreQuery};
use crate::storage::Storage;

pub struct ScoreService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScoreService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_scores(&self, request: &HttpRequest, query: ScoreQuery) -> ActixResult<HttpResponse> {
        list::list_scores(self, request, query).await
    }

    // 批量保存成绩，按 (examId, studentId) upsert
    pub async fn save_scores(
        &self,
        request: &HttpRequest,
        entries: Vec<ScoreEntry>,
    ) -> ActixResult<HttpResponse> {
        save::save_scores(self, request, entries).await
    }
}
