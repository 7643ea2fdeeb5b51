use serde::Serialize;
use ts_rs::TS;

use super::entities::Notification;

/// 通知发布结果
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationCreatedResponse {
    pub notification: Notification,
    pub emails_sent: usize,
}
