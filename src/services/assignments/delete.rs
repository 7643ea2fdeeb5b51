use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiError, ErrorCode, MessageResponse};

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_assignment(&assignment_id).await {
        Ok(true) => {
            info!("Assignment {} deleted with its submissions", assignment_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::AssignmentNotFound, "Assignment not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
