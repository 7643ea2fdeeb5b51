use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub total_marks: i32,
    // 可选的所属班级
    pub class_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
