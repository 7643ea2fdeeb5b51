use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::error;

use super::ClassService;

pub async fn list_classes(service: &ClassService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(classes)),
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(e.error_response())
        }
    }
}
