use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use futures_util::future::join_all;
use tracing::{info, warn};

use super::SubmissionService;
use super::policy::changes_for_grade;
use crate::models::submissions::requests::SaveGradesRequest;
use crate::models::submissions::responses::SaveGradesResponse;

pub async fn save_grades(
    service: &SubmissionService,
    request: &HttpRequest,
    grades: SaveGradesRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let mut unchanged = 0;
    let mut failed = 0;
    let mut pending = Vec::new();

    // 1. 与已保存的快照比较，跳过未变化的行
    for edit in &grades.grades {
        match storage.get_submission_by_id(&edit.submission_id).await {
            Ok(Some(current)) => match changes_for_grade(&current, edit) {
                Some(changes) => pending.push((current.id, changes)),
                None => unchanged += 1,
            },
            Ok(None) => {
                warn!("Grade edit for unknown submission {}", edit.submission_id);
                failed += 1;
            }
            Err(e) => return Ok(e.error_response()),
        }
    }

    // 2. 并发写入，不回滚已成功的行
    let results = join_all(pending.into_iter().map(|(id, changes)| {
        let storage = storage.clone();
        async move { (storage.update_submission(&id, changes).await, id) }
    }))
    .await;

    let mut updated = 0;
    for (result, id) in results {
        match result {
            Ok(Some(_)) => updated += 1,
            Ok(None) => {
                warn!("Submission {} disappeared before grading", id);
                failed += 1;
            }
            Err(e) => {
                warn!("Failed to grade submission {}: {}", id, e);
                failed += 1;
            }
        }
    }

    info!(
        "Saved grades: {} updated, {} unchanged, {} failed",
        updated, unchanged, failed
    );
    Ok(HttpResponse::Ok().json(SaveGradesResponse {
        updated,
        unchanged,
        failed,
        success: failed == 0,
    }))
}
