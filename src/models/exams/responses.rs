use serde::Serialize;
use ts_rs::TS;

use super::entities::Exam;

/// 成绩录入表中的一行
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ScoreSheetRow {
    pub student_id: String,
    pub roll: String,
    pub name: String,
    /// 尚未录入时为 null
    pub marks: Option<String>,
}

/// 成绩录入视图：按花名册顺序列出班级学生并预填已有成绩
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ScoreSheet {
    pub exam: Exam,
    pub class_id: String,
    pub rows: Vec<ScoreSheetRow>,
}
