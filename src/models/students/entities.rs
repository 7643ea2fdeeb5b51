use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 走读生
pub const STATUS_DAY_SCHOLAR: &str = "Day Scholar";
/// 住校生
pub const STATUS_HOSTELLER: &str = "Hosteller";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: String,
    pub class_id: String,
    pub name: String,
    pub roll: String,
    pub email: String,
    pub status: String,
    pub phone: String,
    pub parent_phone: String,
    pub parent_email: String,
    pub address: String,
    pub previous_marks: String,
    pub profile_pic: String,
    pub notes: String,
}

impl Student {
    /// 是否有可用的邮箱地址
    pub fn has_deliverable_email(&self) -> bool {
        !self.email.trim().is_empty() && self.email.contains('@')
    }
}

pub fn is_valid_status(status: &str) -> bool {
    status == STATUS_DAY_SCHOLAR || status == STATUS_HOSTELLER
}
