use std::cmp::Ordering;
use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{info, warn};

use super::SubmissionService;
use crate::errors::EduMateError;
use crate::models::students::entities::Student;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::responses::SubmissionRow;
use crate::models::{ApiError, ErrorCode};
use crate::services::classes::lookup::resolve_scope;
use crate::services::notifications::fanout::students_in_scope;
use crate::utils::compare_rolls;

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assignment = match storage.get_assignment_by_id(&assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiError::new(ErrorCode::AssignmentNotFound, "Assignment not found")));
        }
        Err(e) => return Ok(e.error_response()),
    };

    // 班级已被删除时名单为空
    let students = match resolve_scope(&storage, &assignment.class_name).await {
        Ok(scope) => match students_in_scope(&storage, &scope).await {
            Ok(students) => students,
            Err(e) => return Ok(e.error_response()),
        },
        Err(EduMateError::ClassLookup(msg)) => {
            warn!("Assignment {} targets a missing class: {}", assignment.id, msg);
            Vec::new()
        }
        Err(e) => return Ok(e.error_response()),
    };

    let student_ids: Vec<String> = students.iter().map(|s| s.id.clone()).collect();
    match storage.ensure_submissions(&assignment.id, &student_ids).await {
        Ok(0) => {}
        Ok(created) => info!(
            "Created {} placeholder submissions for assignment {}",
            created, assignment.id
        ),
        Err(e) => return Ok(e.error_response()),
    }

    match storage.list_submissions_by_assignment(&assignment.id).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(build_rows(&students, submissions))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 只保留名单内学生的行，已提交的排在前面，其余按学号排序
fn build_rows(students: &[Student], submissions: Vec<Submission>) -> Vec<SubmissionRow> {
    let by_id: HashMap<&str, &Student> = students.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut rows: Vec<SubmissionRow> = submissions
        .into_iter()
        .filter_map(|submission| {
            let student = by_id.get(submission.student_id.as_str())?;
            Some(SubmissionRow {
                student_name: student.name.clone(),
                student_roll: student.roll.clone(),
                submission,
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        let a_first = a.submission.status == SubmissionStatus::Submitted;
        let b_first = b.submission.status == SubmissionStatus::Submitted;
        match (a_first, b_first) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_rolls(&a.student_roll, &b.student_roll),
        }
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, roll: &str) -> Student {
        Student {
            id: id.to_string(),
            class_id: "c1".to_string(),
            name: format!("Student {roll}"),
            roll: roll.to_string(),
            email: String::new(),
            status: "Day Scholar".to_string(),
            phone: String::new(),
            parent_phone: String::new(),
            parent_email: String::new(),
            address: String::new(),
            previous_marks: String::new(),
            profile_pic: String::new(),
            notes: String::new(),
        }
    }

    fn submission(id: &str, student_id: &str, status: SubmissionStatus) -> Submission {
        Submission {
            id: id.to_string(),
            assignment_id: "a1".to_string(),
            student_id: student_id.to_string(),
            file_url: String::new(),
            submission_date: String::new(),
            status,
            grade: String::new(),
            feedback: String::new(),
        }
    }

    #[test]
    fn test_submitted_first_then_roll_order() {
        let students = vec![student("s1", "1"), student("s2", "2"), student("s10", "10")];
        let submissions = vec![
            submission("x1", "s1", SubmissionStatus::NotSubmitted),
            submission("x10", "s10", SubmissionStatus::Submitted),
            submission("x2", "s2", SubmissionStatus::Graded),
        ];

        let rows = build_rows(&students, submissions);
        let ids: Vec<&str> = rows.iter().map(|r| r.submission.id.as_str()).collect();
        assert_eq!(ids, vec!["x10", "x1", "x2"]);
        assert_eq!(rows[0].student_roll, "10");
    }

    #[test]
    fn test_rows_outside_roster_are_dropped() {
        let students = vec![student("s1", "1")];
        let submissions = vec![
            submission("x1", "s1", SubmissionStatus::NotSubmitted),
            submission("x9", "moved", SubmissionStatus::Submitted),
        ];

        let rows = build_rows(&students, submissions);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_name, "Student 1");
    }
}
