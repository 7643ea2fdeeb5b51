use serde::Serialize;
use ts_rs::TS;

use crate::models::attendance::responses::AttendanceStats;

/// 单次考试成绩摘要
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ExamScoreSummary {
    pub exam: String,
    pub total: i32,
    pub obtained: String,
}

/// 学生分析数据：出勤率、各次考试成绩与备注
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentAnalytics {
    pub attendance: AttendanceStats,
    pub scores: Vec<ExamScoreSummary>,
    pub notes: String,
}
