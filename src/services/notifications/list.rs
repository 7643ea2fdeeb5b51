use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::NotificationService;

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_notifications().await {
        Ok(notifications) => Ok(HttpResponse::Ok().json(notifications)),
        Err(e) => Ok(e.error_response()),
    }
}
