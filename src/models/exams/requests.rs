use serde::Deserialize;
use ts_rs::TS;

// 创建考试请求，totalMarks 可以是数字或数字字符串
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct CreateExamRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub total_marks: serde_json::Value,
    pub class_id: Option<String>,
}

// 成绩录入表查询参数
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ScoreSheetQuery {
    pub class_id: Option<String>,
}
