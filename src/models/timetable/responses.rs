use serde::Serialize;
use ts_rs::TS;

use super::entities::TimetableEntry;

/// 周视图中的一天
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableDay {
    pub day: String,
    pub entries: Vec<TimetableEntry>,
}

/// 网格视图中的一行（同一时间）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableRow {
    pub time: String,
    /// 周一到周日，每天一个单元格
    pub cells: Vec<Option<TimetableEntry>>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableGrid {
    pub days: Vec<String>,
    pub rows: Vec<TimetableRow>,
}
