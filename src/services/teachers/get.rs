use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiError, ErrorCode};

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_teacher_by_id(&id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(teacher)),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::TeacherNotFound, "Teacher not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
