use serde::Deserialize;
use ts_rs::TS;

use super::entities::SubmissionStatus;

// 更新单条提交记录请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct UpdateSubmissionRequest {
    #[serde(default)]
    pub id: String,
    pub grade: Option<String>,
    pub feedback: Option<String>,
    pub status: Option<SubmissionStatus>,
    pub file_url: Option<String>,
    pub submission_date: Option<String>,
}

// 批量评分中的单条编辑
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeEdit {
    pub submission_id: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub feedback: String,
}

// 批量保存评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SaveGradesRequest {
    #[serde(default)]
    pub grades: Vec<GradeEdit>,
}

/// 存储层使用的更新字段集合，None 表示不修改
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionChanges {
    pub grade: Option<String>,
    pub feedback: Option<String>,
    pub status: Option<SubmissionStatus>,
    pub file_url: Option<String>,
    pub submission_date: Option<String>,
}
