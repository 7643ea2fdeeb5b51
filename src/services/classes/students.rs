use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiError, ErrorCode};
use crate::utils::validate::require_field;

pub async fn add_student(
    service: &ClassService,
    request: &HttpRequest,
    class_id: String,
    mut student: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    student.name = match require_field(&student.name, "name") {
        Ok(name) => name,
        Err(e) => return Ok(e.error_response()),
    };
    student.roll = match require_field(&student.roll, "roll") {
        Ok(roll) => roll,
        Err(e) => return Ok(e.error_response()),
    };

    match storage.get_class_by_id(&class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiError::new(ErrorCode::ClassNotFound, "Class not found")));
        }
        Err(e) => return Ok(e.error_response()),
    }

    match storage.create_student(&class_id, student).await {
        Ok(student) => {
            info!("Student {} added to class {}", student.id, class_id);
            Ok(HttpResponse::Created().json(student))
        }
        Err(e) => {
            error!("Failed to add student: {}", e);
            Ok(e.error_response())
        }
    }
}
