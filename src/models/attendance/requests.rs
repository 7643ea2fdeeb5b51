use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceStatus;

// 批量考勤中的单条记录
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceMark {
    pub student_id: String,
    pub student_name: Option<String>,
    pub class_name: String,
    pub date: String,
    pub status: AttendanceStatus,
    pub period: Option<String>,
}

// 考勤查询参数
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceQuery {
    pub date: Option<String>,
    pub student_id: Option<String>,
}

// 按日期汇总查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryQuery {
    pub date: Option<String>,
}

// 课程表科目对应的点名名单查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRosterQuery {
    #[serde(default)]
    pub subject: String,
}

/// 已校验并规范化、可直接写入的考勤记录
#[derive(Debug, Clone)]
pub struct NormalizedAttendance {
    pub date: String,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub status: AttendanceStatus,
    pub period: String,
}
