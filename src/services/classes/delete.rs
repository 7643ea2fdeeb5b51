use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::{ApiError, ErrorCode, MessageResponse};

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_class(&class_id).await {
        Ok(true) => {
            info!("Class {} deleted with its students and exams", class_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::ClassNotFound, "Class not found"))),
        Err(e) => {
            error!("Class deletion failed: {}", e);
            Ok(e.error_response())
        }
    }
}
