use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::StudentService;
use crate::models::attendance::requests::AttendanceQuery;
use crate::models::exams::entities::Exam;
use crate::models::scores::entities::Score;
use crate::models::students::responses::{ExamScoreSummary, StudentAnalytics};
use crate::models::{ApiError, ErrorCode};
use crate::services::attendance::stats::compute_student_attendance;

pub async fn get_analytics(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let student = match storage.get_student_by_id(&student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiError::new(ErrorCode::StudentNotFound, "Student not found")));
        }
        Err(e) => return Ok(e.error_response()),
    };

    let query = AttendanceQuery {
        date: None,
        student_id: Some(student.id.clone()),
    };
    let records = match storage.list_attendance(query).await {
        Ok(records) => records,
        Err(e) => return Ok(e.error_response()),
    };
    let scores = match storage.list_scores_by_student(&student.id).await {
        Ok(scores) => scores,
        Err(e) => return Ok(e.error_response()),
    };
    let exams = match storage.list_exams().await {
        Ok(exams) => exams,
        Err(e) => return Ok(e.error_response()),
    };

    Ok(HttpResponse::Ok().json(StudentAnalytics {
        attendance: compute_student_attendance(&records),
        scores: summarize_scores(&exams, scores),
        notes: student.notes,
    }))
}

/// 按考试顺序列出学生已有的成绩
fn summarize_scores(exams: &[Exam], scores: Vec<Score>) -> Vec<ExamScoreSummary> {
    let mut by_exam: HashMap<String, String> = scores
        .into_iter()
        .map(|score| (score.exam_id, score.marks))
        .collect();

    exams
        .iter()
        .filter_map(|exam| {
            by_exam.remove(&exam.id).map(|obtained| ExamScoreSummary {
                exam: exam.title.clone(),
                total: exam.total_marks,
                obtained,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn exam(id: &str, title: &str, total: i32) -> Exam {
        Exam {
            id: id.to_string(),
            title: title.to_string(),
            total_marks: total,
            class_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summarize_scores_follows_exam_order() {
        let exams = vec![exam("e1", "Unit Test", 25), exam("e2", "Midterm", 100)];
        let scores = vec![
            Score {
                exam_id: "e2".to_string(),
                student_id: "s1".to_string(),
                marks: "88".to_string(),
            },
            Score {
                exam_id: "e1".to_string(),
                student_id: "s1".to_string(),
                marks: "Ab".to_string(),
            },
        ];

        let summary = summarize_scores(&exams, scores);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].exam, "Unit Test");
        assert_eq!(summary[0].obtained, "Ab");
        assert_eq!(summary[1].total, 100);
    }

    #[test]
    fn test_summarize_scores_skips_exams_without_marks() {
        let exams = vec![exam("e1", "Unit Test", 25)];
        assert!(summarize_scores(&exams, Vec::new()).is_empty());
    }
}
