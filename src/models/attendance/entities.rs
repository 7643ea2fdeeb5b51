use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 默认课时
pub const DEFAULT_PERIOD: &str = "Period 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    #[serde(rename = "P", alias = "Present")]
    Present,
    #[serde(rename = "A", alias = "Absent")]
    Absent,
}

impl AttendanceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(AttendanceStatus::Present),
            "A" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: String,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub status: AttendanceStatus,
    pub period: String,
}
