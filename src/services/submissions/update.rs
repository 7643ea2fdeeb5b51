use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use super::policy::changes_for_update;
use crate::models::submissions::requests::{SubmissionChanges, UpdateSubmissionRequest};
use crate::models::{ApiError, ErrorCode};
use crate::utils::validate::require_field;

pub async fn update_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    update: UpdateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let submission_id = match require_field(&update.id, "id") {
        Ok(id) => id,
        Err(e) => return Ok(e.error_response()),
    };
    let current = match storage.get_submission_by_id(&submission_id).await {
        Ok(Some(current)) => current,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiError::new(ErrorCode::SubmissionNotFound, "Submission not found")));
        }
        Err(e) => return Ok(e.error_response()),
    };

    let changes = changes_for_update(&current, update);
    if changes == SubmissionChanges::default() {
        return Ok(HttpResponse::Ok().json(current));
    }

    match storage.update_submission(&submission_id, changes).await {
        Ok(Some(updated)) => {
            info!("Submission {} updated to {}", updated.id, updated.status.label());
            Ok(HttpResponse::Ok().json(updated))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::SubmissionNotFound, "Submission not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
