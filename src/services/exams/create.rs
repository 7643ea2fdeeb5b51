use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::ExamService;
use crate::models::exams::requests::CreateExamRequest;
use crate::models::{ApiError, ErrorCode};
use crate::utils::validate::{parse_total_marks, require_field};

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let title = match require_field(&exam.title, "title") {
        Ok(title) => title,
        Err(e) => return Ok(e.error_response()),
    };
    let total_marks = match parse_total_marks(&exam.total_marks) {
        Ok(total) => total,
        Err(e) => return Ok(e.error_response()),
    };

    // 指定了班级时必须存在
    let class_id = exam
        .class_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());
    if let Some(class_id) = class_id.as_deref() {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound()
                    .json(ApiError::new(ErrorCode::ClassNotFound, "Class not found")));
            }
            Err(e) => return Ok(e.error_response()),
        }
    }

    match storage.create_exam(&title, total_marks, class_id).await {
        Ok(exam) => {
            info!("Exam {} created", exam.id);
            Ok(HttpResponse::Created().json(exam))
        }
        Err(e) => {
            error!("Exam creation failed: {}", e);
            Ok(e.error_response())
        }
    }
}
