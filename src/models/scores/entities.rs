use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct Score {
    pub exam_id: String,
    pub student_id: String,
    // 原样保存的分数字符串
    pub marks: String,
}
