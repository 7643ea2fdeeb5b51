use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use chrono::Local;
use tracing::{error, info};

use super::NotificationService;
use super::fanout::{notify_students, students_in_scope};
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::notifications::responses::NotificationCreatedResponse;
use crate::services::classes::lookup::resolve_scope;
use crate::utils::validate::require_field;

/// 未提供时间戳时使用的显示格式
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// 服务器本地时间的显示字符串
pub fn display_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub async fn create_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification: CreateNotificationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let mailer = service.get_mailer(request)?;

    // 1. 校验
    let message = match require_field(&notification.message, "message") {
        Ok(message) => message,
        Err(e) => return Ok(e.error_response()),
    };
    let class_name = notification.class_name.trim().to_string();
    let scope = match resolve_scope(&storage, &class_name).await {
        Ok(scope) => scope,
        Err(e) => return Ok(e.error_response()),
    };
    let timestamp = notification
        .timestamp
        .map(|ts| ts.trim().to_string())
        .filter(|ts| !ts.is_empty())
        .unwrap_or_else(display_timestamp);

    // 2. 持久化
    let created = match storage
        .create_notification(&message, &class_name, &timestamp)
        .await
    {
        Ok(created) => created,
        Err(e) => {
            error!("Failed to save notification: {}", e);
            return Ok(e.error_response());
        }
    };
    info!("Notification {} posted to {}", created.id, class_name);

    // 3. 投递邮件，失败不影响已保存的通知
    let students = match students_in_scope(&storage, &scope).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to load recipients for notification {}: {}", created.id, e);
            Vec::new()
        }
    };
    let emails_sent = notify_students(&mailer, &students, &class_name, &message).await;

    Ok(HttpResponse::Created().json(NotificationCreatedResponse {
        notification: created,
        emails_sent,
    }))
}
