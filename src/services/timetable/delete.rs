use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::TimetableService;
use crate::models::{ApiError, ErrorCode, MessageResponse};

pub async fn delete_entry(
    service: &TimetableService,
    request: &HttpRequest,
    entry_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_timetable_entry(&entry_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiError::new(
            ErrorCode::TimetableEntryNotFound,
            "Timetable entry not found",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}
