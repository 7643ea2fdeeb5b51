pub mod create;
pub mod delete;
pub mod list;
pub mod views;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::timetable::requests::CreateTimetableEntryRequest;
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_entries(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_entries(self, request).await
    }

    // 周视图：周一到周日
    pub async fn week_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::week_view(self, request).await
    }

    // 网格视图：时间 × 星期
    pub async fn grid_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::grid_view(self, request).await
    }

    pub async fn create_entry(
        &self,
        request: &HttpRequest,
        entry: CreateTimetableEntryRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_entry(self, request, entry).await
    }

    pub async fn delete_entry(
        &self,
        request: &HttpRequest,
        entry_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_entry(self, request, entry_id).await
    }
}
