use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::requests::AttendanceQuery;
use crate::utils::validate::normalize_date;

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    mut query: AttendanceQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    query.date = query.date.filter(|d| !d.trim().is_empty());
    query.student_id = query.student_id.filter(|id| !id.trim().is_empty());

    // 没有任何过滤条件时返回空列表
    if query.date.is_none() && query.student_id.is_none() {
        return Ok(HttpResponse::Ok().json(Vec::<()>::new()));
    }
    if let Some(date) = query.date.as_deref() {
        match normalize_date(date) {
            Ok(iso) => query.date = Some(iso),
            Err(e) => return Ok(e.error_response()),
        }
    }

    match storage.list_attendance(query).await {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),
        Err(e) => Ok(e.error_response()),
    }
}
