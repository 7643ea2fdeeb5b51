pub mod analytics;
pub mod delete;
pub mod notes;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{StudentNotesRequest, UpdateStudentRequest};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 部分更新学生资料
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: String,
        update: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, update).await
    }

    pub async fn save_notes(
        &self,
        request: &HttpRequest,
        student_id: String,
        notes: StudentNotesRequest,
    ) -> ActixResult<HttpResponse> {
        notes::save_notes(self, request, student_id, notes).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }

    // 出勤率与各次考试成绩
    pub async fn get_analytics(
        &self,
        request: &HttpRequest,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        analytics::get_analytics(self, request, student_id).await
    }
}
