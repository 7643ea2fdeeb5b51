use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::{ApiError, ErrorCode, teachers::requests::UpdateTeacherRequest};

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: String,
    mut update: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 提供了姓名时不允许为空
    if let Some(name) = update.name.as_mut() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(HttpResponse::BadRequest()
                .json(ApiError::new(ErrorCode::ValidationFailed, "name must not be empty")));
        }
        *name = trimmed.to_string();
    }

    match storage.update_teacher(&id, update).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated profile", teacher.id);
            Ok(HttpResponse::Ok().json(teacher))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::TeacherNotFound, "Teacher not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
