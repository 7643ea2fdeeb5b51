use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::models::{ApiError, ErrorCode, MessageResponse};

pub async fn delete_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_exam(&exam_id).await {
        Ok(true) => {
            info!("Exam {} deleted with its scores", exam_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::ExamNotFound, "Exam not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
