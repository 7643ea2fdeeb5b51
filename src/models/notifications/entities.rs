use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 发送给全部班级时使用的班级名称
pub const ALL_CLASSES: &str = "All Classes";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub class_name: String,
    pub timestamp: String,
}
