use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info, warn};

use super::TimetableService;
use super::views::{normalize_day, normalize_time};
use crate::errors::EduMateError;
use crate::models::timetable::requests::CreateTimetableEntryRequest;
use crate::models::{ApiError, ErrorCode};
use crate::services::classes::lookup::{CLASS_NAME_MISMATCH, resolve_class_name};
use crate::storage::NewTimetableEntry;

pub async fn create_entry(
    service: &TimetableService,
    request: &HttpRequest,
    entry: CreateTimetableEntryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 星期与时间
    let Some(day) = normalize_day(&entry.day) else {
        return Ok(HttpResponse::BadRequest().json(ApiError::new(
            ErrorCode::ValidationFailed,
            "day must be one of Monday..Sunday",
        )));
    };
    let Some(time) = normalize_time(&entry.time) else {
        return Ok(HttpResponse::BadRequest()
            .json(ApiError::new(ErrorCode::ValidationFailed, "time must be HH:MM")));
    };
    let subject = entry.subject.trim();
    if subject.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiError::new(ErrorCode::ValidationFailed, "subject is required")));
    }

    // 2. 科目必须是现有班级的名称
    match resolve_class_name(&storage, subject).await {
        Ok(_) => {}
        Err(EduMateError::ClassLookup(msg)) => {
            warn!("Timetable subject does not match a class: {}", msg);
            return Ok(HttpResponse::UnprocessableEntity()
                .json(ApiError::new(ErrorCode::ClassNameMismatch, CLASS_NAME_MISMATCH)));
        }
        Err(e) => return Ok(e.error_response()),
    }

    let new_entry = NewTimetableEntry {
        day: day.to_string(),
        time,
        subject: subject.to_string(),
        teacher: entry.teacher.unwrap_or_default().trim().to_string(),
        location: entry.location.unwrap_or_default().trim().to_string(),
    };

    match storage.create_timetable_entry(new_entry).await {
        Ok(created) => {
            info!("Timetable entry {} created", created.id);
            Ok(HttpResponse::Created().json(created))
        }
        Err(e) => {
            error!("Timetable entry creation failed: {}", e);
            Ok(e.error_response())
        }
    }
}
