use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::ExamService;

pub async fn list_exams(service: &ExamService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_exams().await {
        Ok(exams) => Ok(HttpResponse::Ok().json(exams)),
        Err(e) => Ok(e.error_response()),
    }
}
