use serde::Deserialize;
use ts_rs::TS;

// 创建课程表条目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableEntryRequest {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub subject: String,
    pub teacher: Option<String>,
    pub location: Option<String>,
}
