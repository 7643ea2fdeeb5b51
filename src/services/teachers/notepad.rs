use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiError, ErrorCode, MessageResponse, teachers::requests::NotepadRequest};

pub async fn save_notepad(
    service: &TeacherService,
    request: &HttpRequest,
    id: String,
    notepad: NotepadRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_teacher_notepad(&id, &notepad.notepad).await {
        Ok(true) => Ok(HttpResponse::Ok().json(MessageResponse::new("Saved"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::TeacherNotFound, "Teacher not found"))),
        Err(e) => Ok(e.error_response()),
    }
}
