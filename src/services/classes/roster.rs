use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiError, ErrorCode};

pub async fn get_roster(
    service: &ClassService,
    request: &HttpRequest,
    class_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 班级本身已按花名册顺序带出学生
    match storage.get_class_by_id(&class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(class.students)),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::ClassNotFound, "Class not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
