//! 提交状态规则
//!
//! 显式给出的状态优先；否则写入非空成绩会把状态提升为 "Graded"，
//! 但 "Not Submitted" 的行不会因为评分而自动提升。

use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::requests::{GradeEdit, SubmissionChanges, UpdateSubmissionRequest};

/// 计算新的状态，None 表示不修改
pub fn resolve_status(
    current: SubmissionStatus,
    explicit: Option<SubmissionStatus>,
    grade: Option<&str>,
) -> Option<SubmissionStatus> {
    if let Some(status) = explicit {
        return (status != current).then_some(status);
    }
    let graded = grade.is_some_and(|g| !g.trim().is_empty());
    if graded && current == SubmissionStatus::Submitted {
        return Some(SubmissionStatus::Graded);
    }
    None
}

/// 单条更新请求对应的字段变更，只保留与当前值不同的字段
pub fn changes_for_update(current: &Submission, update: UpdateSubmissionRequest) -> SubmissionChanges {
    let grade = update.grade.map(|g| g.trim().to_string());
    let feedback = update.feedback.map(|f| f.trim().to_string());
    let status = resolve_status(current.status, update.status, grade.as_deref());
    SubmissionChanges {
        grade: grade.filter(|g| *g != current.grade),
        feedback: feedback.filter(|f| *f != current.feedback),
        status,
        file_url: update.file_url.filter(|u| *u != current.file_url),
        submission_date: update.submission_date.filter(|d| *d != current.submission_date),
    }
}

/// 批量评分中的一行，去除首尾空白后与已保存的成绩和评语一致时返回 None
pub fn changes_for_grade(current: &Submission, edit: &GradeEdit) -> Option<SubmissionChanges> {
    let grade = edit.grade.trim();
    let feedback = edit.feedback.trim();
    if grade == current.grade && feedback == current.feedback {
        return None;
    }
    Some(SubmissionChanges {
        grade: Some(grade.to_string()),
        feedback: Some(feedback.to_string()),
        status: resolve_status(current.status, None, Some(grade)),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(status: SubmissionStatus, grade: &str) -> Submission {
        Submission {
            id: "sub1".to_string(),
            assignment_id: "a1".to_string(),
            student_id: "s1".to_string(),
            file_url: String::new(),
            submission_date: String::new(),
            status,
            grade: grade.to_string(),
            feedback: String::new(),
        }
    }

    #[test]
    fn test_grading_submitted_row_promotes() {
        assert_eq!(
            resolve_status(SubmissionStatus::Submitted, None, Some("A")),
            Some(SubmissionStatus::Graded)
        );
    }

    #[test]
    fn test_grading_not_submitted_row_keeps_status() {
        assert_eq!(
            resolve_status(SubmissionStatus::NotSubmitted, None, Some("A")),
            None
        );
    }

    #[test]
    fn test_empty_grade_does_not_promote() {
        assert_eq!(resolve_status(SubmissionStatus::Submitted, None, Some("  ")), None);
        assert_eq!(resolve_status(SubmissionStatus::Submitted, None, None), None);
    }

    #[test]
    fn test_explicit_status_wins() {
        assert_eq!(
            resolve_status(
                SubmissionStatus::NotSubmitted,
                Some(SubmissionStatus::Graded),
                None
            ),
            Some(SubmissionStatus::Graded)
        );
        assert_eq!(
            resolve_status(
                SubmissionStatus::Submitted,
                Some(SubmissionStatus::Submitted),
                Some("B")
            ),
            None
        );
    }

    #[test]
    fn test_unchanged_grade_is_skipped() {
        let current = submission(SubmissionStatus::Graded, "A");
        let edit = GradeEdit {
            submission_id: "sub1".to_string(),
            grade: "A".to_string(),
            feedback: String::new(),
        };
        assert!(changes_for_grade(&current, &edit).is_none());
    }

    #[test]
    fn test_padded_grade_is_trimmed_before_comparing() {
        let current = submission(SubmissionStatus::Graded, "A");
        let edit = GradeEdit {
            submission_id: "sub1".to_string(),
            grade: " A ".to_string(),
            feedback: "  ".to_string(),
        };
        assert!(changes_for_grade(&current, &edit).is_none());

        let edit = GradeEdit {
            submission_id: "sub1".to_string(),
            grade: " B ".to_string(),
            feedback: "ok ".to_string(),
        };
        let changes = changes_for_grade(&current, &edit).unwrap();
        assert_eq!(changes.grade.as_deref(), Some("B"));
        assert_eq!(changes.feedback.as_deref(), Some("ok"));
    }

    #[test]
    fn test_update_trims_grade_and_feedback() {
        let current = submission(SubmissionStatus::Graded, "A");
        let update = UpdateSubmissionRequest {
            id: "sub1".to_string(),
            grade: Some(" A ".to_string()),
            feedback: Some(" Nice ".to_string()),
            ..Default::default()
        };
        let changes = changes_for_update(&current, update);
        assert_eq!(changes.grade, None);
        assert_eq!(changes.feedback.as_deref(), Some("Nice"));
    }

    #[test]
    fn test_changed_grade_carries_status() {
        let current = submission(SubmissionStatus::Submitted, "");
        let edit = GradeEdit {
            submission_id: "sub1".to_string(),
            grade: "B+".to_string(),
            feedback: "Good work".to_string(),
        };
        let changes = changes_for_grade(&current, &edit);
        assert_eq!(
            changes,
            Some(SubmissionChanges {
                grade: Some("B+".to_string()),
                feedback: Some("Good work".to_string()),
                status: Some(SubmissionStatus::Graded),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_update_keeps_only_differing_fields() {
        let current = submission(SubmissionStatus::Submitted, "A");
        let update = UpdateSubmissionRequest {
            id: "sub1".to_string(),
            grade: Some("A".to_string()),
            feedback: Some("Nice".to_string()),
            ..Default::default()
        };
        let changes = changes_for_update(&current, update);
        assert_eq!(changes.grade, None);
        assert_eq!(changes.feedback.as_deref(), Some("Nice"));
        // 成绩未变，但非空成绩仍会把 Submitted 提升为 Graded
        assert_eq!(changes.status, Some(SubmissionStatus::Graded));
    }
}
