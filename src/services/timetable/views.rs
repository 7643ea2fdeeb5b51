//! 课程表的周视图与网格视图

use std::collections::BTreeSet;

use crate::models::timetable::entities::TimetableEntry;
use crate::models::timetable::responses::{TimetableDay, TimetableGrid, TimetableRow};

/// 固定的一周顺序
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 大小写不敏感地匹配星期名称，返回规范写法
pub fn normalize_day(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    WEEK_DAYS
        .iter()
        .copied()
        .find(|day| day.eq_ignore_ascii_case(raw))
}

/// 解析 H:MM 或 HH:MM，返回补零后的 HH:MM
pub fn normalize_time(raw: &str) -> Option<String> {
    let (hour, minute) = raw.trim().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}

/// 按星期分组，每天都出现，组内按时间升序
pub fn build_week(entries: &[TimetableEntry]) -> Vec<TimetableDay> {
    WEEK_DAYS
        .iter()
        .map(|day| {
            let mut day_entries: Vec<TimetableEntry> = entries
                .iter()
                .filter(|entry| entry.day == *day)
                .cloned()
                .collect();
            // 时间已补零，字符串比较即时间顺序
            day_entries.sort_by(|a, b| a.time.cmp(&b.time));
            TimetableDay {
                day: day.to_string(),
                entries: day_entries,
            }
        })
        .collect()
}

/// 透视为 时间 × 星期 的网格
pub fn build_grid(entries: &[TimetableEntry]) -> TimetableGrid {
    let times: BTreeSet<&str> = entries.iter().map(|entry| entry.time.as_str()).collect();

    let rows = times
        .into_iter()
        .map(|time| TimetableRow {
            time: time.to_string(),
            cells: WEEK_DAYS
                .iter()
                .map(|day| {
                    entries
                        .iter()
                        .find(|entry| entry.time == time && entry.day == *day)
                        .cloned()
                })
                .collect(),
        })
        .collect();

    TimetableGrid {
        days: WEEK_DAYS.iter().map(|day| day.to_string()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, day: &str, time: &str) -> TimetableEntry {
        TimetableEntry {
            id: id.to_string(),
            day: day.to_string(),
            time: time.to_string(),
            subject: "10A".to_string(),
            teacher: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("9:05").as_deref(), Some("09:05"));
        assert_eq!(normalize_time("14:30").as_deref(), Some("14:30"));
        assert_eq!(normalize_time("24:00"), None);
        assert_eq!(normalize_time("9:5"), None);
        assert_eq!(normalize_time("nine"), None);
        assert_eq!(normalize_time(""), None);
    }

    #[test]
    fn test_normalize_day() {
        assert_eq!(normalize_day("monday"), Some("Monday"));
        assert_eq!(normalize_day(" Sunday "), Some("Sunday"));
        assert_eq!(normalize_day("Funday"), None);
    }

    #[test]
    fn test_week_has_every_day_in_order() {
        let entries = vec![
            entry("a", "Wednesday", "11:00"),
            entry("b", "Monday", "10:00"),
            entry("c", "Monday", "09:00"),
        ];
        let week = build_week(&entries);

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, "Monday");
        assert_eq!(week[6].day, "Sunday");
        let monday: Vec<&str> = week[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(monday, vec!["c", "b"]);
        assert_eq!(week[2].entries.len(), 1);
        assert!(week[1].entries.is_empty());
    }

    #[test]
    fn test_grid_rows_are_distinct_times() {
        let entries = vec![
            entry("a", "Tuesday", "10:00"),
            entry("b", "Monday", "09:00"),
            entry("c", "Friday", "09:00"),
        ];
        let grid = build_grid(&entries);

        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0].time, "09:00");
        assert_eq!(grid.rows[0].cells.len(), 7);
        assert_eq!(grid.rows[0].cells[0].as_ref().map(|e| e.id.as_str()), Some("b"));
        assert!(grid.rows[0].cells[1].is_none());
        assert_eq!(grid.rows[0].cells[4].as_ref().map(|e| e.id.as_str()), Some("c"));
        assert_eq!(grid.rows[1].cells[1].as_ref().map(|e| e.id.as_str()), Some("a"));
    }
}
