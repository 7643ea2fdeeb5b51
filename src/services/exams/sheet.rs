use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::ScoreSheetQuery;
use crate::models::exams::responses::{ScoreSheet, ScoreSheetRow};
use crate::models::scores::entities::Score;
use crate::models::students::entities::Student;
use crate::models::{ApiError, ErrorCode};

pub async fn score_sheet(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: String,
    query: ScoreSheetQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let exam = match storage.get_exam_by_id(&exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiError::new(ErrorCode::ExamNotFound, "Exam not found")));
        }
        Err(e) => return Ok(e.error_response()),
    };

    // 查询参数优先，其次是考试所属班级
    let Some(class_id) = query
        .class_id
        .filter(|id| !id.trim().is_empty())
        .or_else(|| exam.class_id.clone())
    else {
        return Ok(HttpResponse::BadRequest()
            .json(ApiError::new(ErrorCode::ValidationFailed, "classId is required")));
    };

    let class = match storage.get_class_by_id(&class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiError::new(ErrorCode::ClassNotFound, "Class not found")));
        }
        Err(e) => return Ok(e.error_response()),
    };
    let scores = match storage.list_scores_by_exam(&exam.id).await {
        Ok(scores) => scores,
        Err(e) => return Ok(e.error_response()),
    };

    Ok(HttpResponse::Ok().json(ScoreSheet {
        rows: build_rows(&class.students, scores),
        class_id: class.id,
        exam,
    }))
}

/// 按花名册顺序生成行并预填已有成绩
fn build_rows(students: &[Student], scores: Vec<Score>) -> Vec<ScoreSheetRow> {
    let mut marks: HashMap<String, String> = scores
        .into_iter()
        .map(|score| (score.student_id, score.marks))
        .collect();

    students
        .iter()
        .map(|student| ScoreSheetRow {
            student_id: student.id.clone(),
            roll: student.roll.clone(),
            name: student.name.clone(),
            marks: marks.remove(&student.id),
        })
        .collect()
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

    #[test]
    fn test_rows_keep_roster_order_and_prefill() {
        let students = vec![student("s1", "1"), student("s2", "2"), student("s3", "10")];
        let scores = vec![
            Score {
                exam_id: "e1".to_string(),
                student_id: "s3".to_string(),
                marks: "Ab".to_string(),
            },
            Score {
                exam_id: "e1".to_string(),
                student_id: "s1".to_string(),
                marks: "42".to_string(),
            },
            // 已不在班级中的学生不出现
            Score {
                exam_id: "e1".to_string(),
                student_id: "gone".to_string(),
                marks: "7".to_string(),
            },
        ];

        let rows = build_rows(&students, scores);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].marks.as_deref(), Some("42"));
        assert_eq!(rows[1].marks, None);
        assert_eq!(rows[2].roll, "10");
        assert_eq!(rows[2].marks.as_deref(), Some("Ab"));
    }
}
