use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::AttendanceService;
use crate::errors::EduMateError;
use crate::models::attendance::requests::AttendanceRosterQuery;
use crate::models::{ApiError, ErrorCode};
use crate::services::classes::lookup::{CLASS_NAME_MISMATCH, resolve_class_name};

pub async fn roster_for_subject(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceRosterQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match resolve_class_name(&storage, query.subject.trim()).await {
        Ok(class) => Ok(HttpResponse::Ok().json(class.students)),
        Err(EduMateError::ClassLookup(_)) => Ok(HttpResponse::UnprocessableEntity()
            .json(ApiError::new(ErrorCode::ClassNameMismatch, CLASS_NAME_MISMATCH))),
        Err(e) => Ok(e.error_response()),
    }
}
