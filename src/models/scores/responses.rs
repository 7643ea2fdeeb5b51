use serde::Serialize;
use ts_rs::TS;

/// 批量成绩保存结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoresSavedResponse {
    pub msg: String,
    pub saved: usize,
}
