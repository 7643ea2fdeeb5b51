use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use chrono::Local;

use super::AssignmentService;
use super::views::build_views;

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_assignments().await {
        Ok(assignments) => {
            let today = Local::now().date_naive();
            Ok(HttpResponse::Ok().json(build_views(assignments, today)))
        }
        Err(e) => Ok(e.error_response()),
    }
}
