pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod lookup;
pub mod roster;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::students::requests::CreateStudentRequest;
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 获取班级列表（含学生）
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, request).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_class(&self, request: &HttpRequest, class_id: String) -> ActixResult<HttpResponse> {
        get::get_class(self, request, class_id).await
    }

    // 更新班级信息，改名会同步冗余字段
    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: String,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, request, class_id, update_data).await
    }

    // 删除班级及其学生、考试
    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }

    // 按学号排序的花名册
    pub async fn get_roster(&self, request: &HttpRequest, class_id: String) -> ActixResult<HttpResponse> {
        roster::get_roster(self, request, class_id).await
    }

    // 向班级添加学生
    pub async fn add_student(
        &self,
        request: &HttpRequest,
        class_id: String,
        student: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        students::add_student(self, request, class_id, student).await
    }
}
