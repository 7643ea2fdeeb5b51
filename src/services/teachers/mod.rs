pub mod get;
pub mod notepad;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{NotepadRequest, UpdateTeacherRequest};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn get_teacher(&self, request: &HttpRequest, id: String) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, id).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        id: String,
        update: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, id, update).await
    }

    pub async fn save_notepad(
        &self,
        request: &HttpRequest,
        id: String,
        notepad: NotepadRequest,
    ) -> ActixResult<HttpResponse> {
        notepad::save_notepad(self, request, id, notepad).await
    }
}
