pub mod create;
pub mod fanout;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mailer::Mailer;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
    mailer: Option<Arc<dyn Mailer>>,
}

impl NotificationService {
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

    pub async fn list_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request).await
    }

    // 发布通知并向范围内的学生发送邮件
    pub async fn create_notification(
        &self,
        request: &HttpRequest,
        notification: CreateNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notification(self, request, notification).await
    }
}
