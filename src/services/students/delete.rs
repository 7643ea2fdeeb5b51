use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiError, ErrorCode, MessageResponse};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student(&student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::StudentNotFound, "Student not found"))),
        Err(e) => {
            error!("Student deletion failed: {}", e);
            Ok(e.error_response())
        }
    }
}
