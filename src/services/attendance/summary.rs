use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::AttendanceService;
use super::stats::summarize_by_class;
use crate::models::attendance::requests::{AttendanceQuery, AttendanceSummaryQuery};
use crate::utils::validate::normalize_date;

pub async fn summarize_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceSummaryQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some(date) = query.date.filter(|d| !d.trim().is_empty()) else {
        return Ok(HttpResponse::Ok().json(Vec::<()>::new()));
    };
    let date = match normalize_date(&date) {
        Ok(date) => date,
        Err(e) => return Ok(e.error_response()),
    };

    let query = AttendanceQuery {
        date: Some(date),
        student_id: None,
    };
    match storage.list_attendance(query).await {
        Ok(records) => Ok(HttpResponse::Ok().json(summarize_by_class(&records))),
        Err(e) => Ok(e.error_response()),
    }
}
