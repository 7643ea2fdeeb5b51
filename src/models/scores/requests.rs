use serde::Deserialize;
use ts_rs::TS;

// 成绩录入条目，marks 可以是数字或字符串
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreEntry {
    #[serde(default)]
    pub exam_id: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub marks: serde_json::Value,
}

// 成绩查询参数
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreQuery {
    pub exam_id: Option<String>,
}
