use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::notifications::entities::ALL_CLASSES;
use crate::models::{ApiError, ErrorCode};
use crate::utils::validate::require_field;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    mut class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 必填字段
    class_data.name = match require_field(&class_data.name, "name") {
        Ok(name) => name,
        Err(e) => return Ok(e.error_response()),
    };
    class_data.coordinator_name = match require_field(&class_data.coordinator_name, "coordinatorName") {
        Ok(name) => name,
        Err(e) => return Ok(e.error_response()),
    };
    // "All Classes" 是保留的投递范围
    if class_data.name == ALL_CLASSES {
        return Ok(HttpResponse::BadRequest().json(ApiError::new(
            ErrorCode::ValidationFailed,
            format!("'{ALL_CLASSES}' is a reserved class name"),
        )));
    }

    // 2. 名称唯一，按名称引用时才不会有歧义
    match storage.get_class_by_name(&class_data.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiError::new(
                ErrorCode::Conflict,
                "Class name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(e.error_response()),
    }

    // 3. 创建
    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created successfully", class.name);
            Ok(HttpResponse::Created().json(class))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(e.error_response())
        }
    }
}
