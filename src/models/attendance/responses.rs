use serde::Serialize;
use ts_rs::TS;

/// 批量考勤保存结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSavedResponse {
    pub msg: String,
    pub saved: usize,
}

/// 某日某班的出勤汇总
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct ClassAttendanceSummary {
    pub class_name: String,
    pub present: usize,
    pub absent: usize,
}

/// 学生出勤统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceStats {
    pub percentage: u32,
    pub present: usize,
    pub total: usize,
    /// 低于 75% 时为 true
    pub below_threshold: bool,
}
