use chrono::{NaiveDate, NaiveDateTime};

use crate::models::assignments::entities::Assignment;
use crate::models::assignments::responses::AssignmentView;

/// 解析截止日期，支持 ISO 日期、美式日期和 datetime-local 格式
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|dt| dt.date())
        })
}

/// 按截止日期升序排列，无法解析的排在最后；截止日期早于今天的标记为逾期
pub fn build_views(assignments: Vec<Assignment>, today: NaiveDate) -> Vec<AssignmentView> {
    let mut dated: Vec<(Option<NaiveDate>, Assignment)> = assignments
        .into_iter()
        .map(|assignment| (parse_due_date(&assignment.due_date), assignment))
        .collect();

    // 稳定排序，None 排在 Some 之后
    dated.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    dated
        .into_iter()
        .map(|(due, assignment)| AssignmentView {
            overdue: due.is_some_and(|due| due < today),
            assignment,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(id: &str, due_date: &str) -> Assignment {
        Assignment {
            id: id.to_string(),
            title: format!("Assignment {id}"),
            class_name: "10A".to_string(),
            due_date: due_date.to_string(),
            description: String::new(),
            file_url: String::new(),
            created_at: String::new(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_due_date_formats() {
        assert_eq!(parse_due_date("2025-03-10"), Some(day(2025, 3, 10)));
        assert_eq!(parse_due_date("03/10/2025"), Some(day(2025, 3, 10)));
        assert_eq!(parse_due_date("2025-03-10T09:30"), Some(day(2025, 3, 10)));
        assert_eq!(parse_due_date("next week"), None);
    }

    #[test]
    fn test_sorted_by_due_date_with_unparseable_last() {
        let views = build_views(
            vec![
                assignment("late", "someday"),
                assignment("b", "2025-04-01"),
                assignment("a", "03/15/2025"),
            ],
            day(2025, 3, 20),
        );

        let ids: Vec<&str> = views.iter().map(|v| v.assignment.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "late"]);
    }

    #[test]
    fn test_overdue_is_strictly_before_today() {
        let views = build_views(
            vec![
                assignment("past", "2025-03-19"),
                assignment("today", "2025-03-20"),
                assignment("unknown", "tbd"),
            ],
            day(2025, 3, 20),
        );

        assert!(views[0].overdue);
        assert!(!views[1].overdue);
        assert!(!views[2].overdue);
    }
}
