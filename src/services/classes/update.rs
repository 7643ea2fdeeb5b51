use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::notifications::entities::ALL_CLASSES;
use crate::models::{ApiError, ErrorCode};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: String,
    mut update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 改名前检查新名称
    if let Some(name) = update_data.name.as_mut() {
        let trimmed = name.trim().to_string();
        if trimmed.is_empty() || trimmed == ALL_CLASSES {
            return Ok(HttpResponse::BadRequest()
                .json(ApiError::new(ErrorCode::ValidationFailed, "Invalid class name")));
        }
        match storage.get_class_by_name(&trimmed).await {
            Ok(Some(existing)) if existing.id != class_id => {
                return Ok(HttpResponse::Conflict().json(ApiError::new(
                    ErrorCode::Conflict,
                    "Class name already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => return Ok(e.error_response()),
        }
        *name = trimmed;
    }
    if let Some(coordinator) = update_data.coordinator_name.as_mut() {
        let trimmed = coordinator.trim().to_string();
        if trimmed.is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiError::new(
                ErrorCode::ValidationFailed,
                "coordinatorName must not be empty",
            )));
        }
        *coordinator = trimmed;
    }

    match storage.update_class(&class_id, update_data).await {
        Ok(Some(class)) => {
            info!("Class {} updated", class.id);
            Ok(HttpResponse::Ok().json(class))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::ClassNotFound, "Class not found"))),
        Err(e) => {
            error!("Class update failed: {}", e);
            Ok(e.error_response())
        }
    }
}
