pub mod create;
pub mod delete;
pub mod list;
pub mod views;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mailer::Mailer;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
    mailer: Option<Arc<dyn Mailer>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            mailer: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_mailer(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Mailer>> {
        match &self.mailer {
            Some(mailer) => Ok(mailer.clone()),
            None => super::mailer_from_request(request),
        }
    }

    // 按截止日期排序的作业列表
    pub async fn list_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request).await
    }

    // 布置作业，同时发布通知并发送邮件
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        assignment: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, assignment).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, assignment_id).await
    }
}
