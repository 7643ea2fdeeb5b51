use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::StudentNotesRequest;
use crate::models::{ApiError, ErrorCode};

pub async fn save_notes(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
    notes: StudentNotesRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_student_notes(&student_id, &notes.notes).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(student)),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::StudentNotFound, "Student not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
