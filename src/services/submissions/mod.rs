pub mod grade;
pub mod list;
pub mod policy;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{SaveGradesRequest, UpdateSubmissionRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 作业的提交列表，缺少的行会补建为 "Not Submitted"
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, assignment_id).await
    }

    pub async fn update_submission(
        &self,
        request: &HttpRequest,
        update: UpdateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_submission(self, request, update).await
    }

    // 批量评分
    pub async fn save_grades(
        &self,
        request: &HttpRequest,
        grades: SaveGradesRequest,
    ) -> ActixResult<HttpResponse> {
        grade::save_grades(self, request, grades).await
    }
}
