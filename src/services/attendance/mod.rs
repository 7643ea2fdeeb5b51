pub mod list;
pub mod mark;
pub mod roster;
pub mod stats;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceMark, AttendanceQuery, AttendanceRosterQuery, AttendanceSummaryQuery,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 批量点名，按 (date, studentId) upsert
    pub async fn mark_attendance(
        &self,
        request: &HttpRequest,
        marks: Vec<AttendanceMark>,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, request, marks).await
    }

    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, query).await
    }

    // 某日按班级汇总出勤人数
    pub async fn summarize_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceSummaryQuery,
    ) -> ActixResult<HttpResponse> {
        summary::summarize_attendance(self, request, query).await
    }

    // 课程表科目对应的点名名单
    pub async fn roster_for_subject(
        &self,
        request: &HttpRequest,
        query: AttendanceRosterQuery,
    ) -> ActixResult<HttpResponse> {
        roster::roster_for_subject(self, request, query).await
    }
}
