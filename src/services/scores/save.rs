use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::ScoreService;
use crate::models::scores::entities::Score;
use crate::models::scores::requests::ScoreEntry;
use crate::models::scores::responses::ScoresSavedResponse;
use crate::models::{ApiError, ErrorCode};
use crate::utils::validate::{marks_to_string, require_field};

pub async fn save_scores(
    service: &ScoreService,
    request: &HttpRequest,
    entries: Vec<ScoreEntry>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let mut known_exams: HashSet<String> = HashSet::new();
    let mut known_students: HashSet<String> = HashSet::new();
    let mut scores = Vec::with_capacity(entries.len());

    for entry in entries {
        let exam_id = match require_field(&entry.exam_id, "examId") {
            Ok(id) => id,
            Err(e) => return Ok(e.error_response()),
        };
        let student_id = match require_field(&entry.student_id, "studentId") {
            Ok(id) => id,
            Err(e) => return Ok(e.error_response()),
        };
        // 分数按收到的字符串原样保存，空值拒绝
        let marks = match marks_to_string(&entry.marks) {
            Ok(marks) => marks,
            Err(e) => return Ok(e.error_response()),
        };

        if !known_exams.contains(&exam_id) {
            match storage.get_exam_by_id(&exam_id).await {
                Ok(Some(_)) => {
                    known_exams.insert(exam_id.clone());
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiError::new(
                        ErrorCode::ExamNotFound,
                        format!("Exam {exam_id} not found"),
                    )));
                }
                Err(e) => return Ok(e.error_response()),
            }
        }
        if !known_students.contains(&student_id) {
            match storage.get_student_by_id(&student_id).await {
                Ok(Some(_)) => {
                    known_students.insert(student_id.clone());
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiError::new(
                        ErrorCode::StudentNotFound,
                        format!("Student {student_id} not found"),
                    )));
                }
                Err(e) => return Ok(e.error_response()),
            }
        }

        scores.push(Score {
            exam_id,
            student_id,
            marks,
        });
    }

    match storage.upsert_scores(scores).await {
        Ok(saved) => {
            info!("Saved {} scores", saved);
            Ok(HttpResponse::Ok().json(ScoresSavedResponse {
                msg: "Saved".to_string(),
                saved,
            }))
        }
        Err(e) => {
            error!("Failed to save scores: {}", e);
            Ok(e.error_response())
        }
    }
}
