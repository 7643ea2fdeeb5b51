//! 出勤统计

use std::collections::BTreeMap;

use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};
use crate::models::attendance::responses::{AttendanceStats, ClassAttendanceSummary};

/// 出勤率低于该百分比时需要提醒
pub const ATTENDANCE_THRESHOLD: u32 = 75;

/// 单个学生的出勤率，没有记录时为 0
pub fn compute_student_attendance(records: &[AttendanceRecord]) -> AttendanceStats {
    let total = records.len();
    let present = records
        .iter()
        .filter(|record| record.status == AttendanceStatus::Present)
        .count();
    let percentage = if total == 0 {
        0
    } else {
        (present as f64 / total as f64 * 100.0).round() as u32
    };

    AttendanceStats {
        percentage,
        present,
        total,
        below_threshold: percentage < ATTENDANCE_THRESHOLD,
    }
}

/// 按班级名称汇总出勤与缺勤人数，结果按班级名称排序
pub fn summarize_by_class(records: &[AttendanceRecord]) -> Vec<ClassAttendanceSummary> {
    let mut by_class: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in records {
        let counts = by_class.entry(record.class_name.as_str()).or_default();
        match record.status {
            AttendanceStatus::Present => counts.0 += 1,
            AttendanceStatus::Absent => counts.1 += 1,
        }
    }

    by_class
        .into_iter()
        .map(|(class_name, (present, absent))| ClassAttendanceSummary {
            class_name: class_name.to_string(),
            present,
            absent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class_name: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            date: "2025-03-01".to_string(),
            student_id: "s1".to_string(),
            student_name: "Asha".to_string(),
            class_name: class_name.to_string(),
            status,
            period: "Period 1".to_string(),
        }
    }

    #[test]
    fn test_no_records_is_zero_percent() {
        let stats = compute_student_attendance(&[]);
        assert_eq!(stats.percentage, 0);
        assert_eq!(stats.total, 0);
        assert!(stats.below_threshold);
    }

    #[test]
    fn test_percentage_is_rounded() {
        let records = vec![
            record("10A", AttendanceStatus::Present),
            record("10A", AttendanceStatus::Present),
            record("10A", AttendanceStatus::Absent),
        ];
        let stats = compute_student_attendance(&records);
        assert_eq!(stats.percentage, 67);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.total, 3);
        assert!(stats.below_threshold);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let records = vec![
            record("10A", AttendanceStatus::Present),
            record("10A", AttendanceStatus::Present),
            record("10A", AttendanceStatus::Present),
            record("10A", AttendanceStatus::Absent),
        ];
        let stats = compute_student_attendance(&records);
        assert_eq!(stats.percentage, 75);
        assert!(!stats.below_threshold);
    }

    #[test]
    fn test_summary_groups_and_sorts_by_class() {
        let records = vec![
            record("9B", AttendanceStatus::Absent),
            record("10A", AttendanceStatus::Present),
            record("9B", AttendanceStatus::Present),
            record("10A", AttendanceStatus::Present),
        ];
        let summary = summarize_by_class(&records);
        assert_eq!(
            summary,
            vec![
                ClassAttendanceSummary {
                    class_name: "10A".to_string(),
                    present: 2,
                    absent: 0,
                },
                ClassAttendanceSummary {
                    class_name: "9B".to_string(),
                    present: 1,
                    absent: 1,
                },
            ]
        );
    }
}
