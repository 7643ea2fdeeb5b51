use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;

/// 提交列表中的一行，附带学生姓名与学号
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionRow {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub student_name: String,
    pub student_roll: String,
}

/// 批量评分结果
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SaveGradesResponse {
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub success: bool,
}
