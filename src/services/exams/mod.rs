pub mod create;
pub mod delete;
pub mod list;
pub mod sheet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{CreateExamRequest, ScoreSheetQuery};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_exams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_exams(self, request).await
    }

    pub async fn create_exam(
        &self,
        request: &HttpRequest,
        exam: CreateExamRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, request, exam).await
    }

    // 删除考试及其成绩
    pub async fn delete_exam(&self, request: &HttpRequest, exam_id: String) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, request, exam_id).await
    }

    // 某班的成绩录入表
    pub async fn score_sheet(
        &self,
        request: &HttpRequest,
        exam_id: String,
        query: ScoreSheetQuery,
    ) -> ActixResult<HttpResponse> {
        sheet::score_sheet(self, request, exam_id, query).await
    }
}
