use serde::Deserialize;
use ts_rs::TS;

// 发布通知请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct CreateNotificationRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub class_name: String,
    pub timestamp: Option<String>,
}
