use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::notifications::requests::CreateNotificationRequest;
use crate::services::NotificationService;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

pub async fn list_notifications(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_notifications(&req).await
}

pub async fn create_notification(
    req: HttpRequest,
    notification: web::Json<CreateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .create_notification(&req, notification.into_inner())
        .await
}

// 配置路由
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notifications").service(
            web::resource("")
                .route(web::get().to(list_notifications))
                .route(web::post().to(create_notification)),
        ),
    );
}
