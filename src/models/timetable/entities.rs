use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableEntry {
    pub id: String,
    // Monday..Sunday
    pub day: String,
    // HH:MM，补零
    pub time: String,
    // 班级名称
    pub subject: String,
    pub teacher: String,
    pub location: String,
}
