use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{SaveGradesRequest, UpdateSubmissionRequest};
use crate::services::SubmissionService;
use crate::utils::SafeAssignmentId;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn list_submissions(
    req: HttpRequest,
    assignment_id: SafeAssignmentId,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, assignment_id.0)
        .await
}

pub async fn update_submission(
    req: HttpRequest,
    update: web::Json<UpdateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .update_submission(&req, update.into_inner())
        .await
}

pub async fn save_grades(
    req: HttpRequest,
    grades: web::Json<SaveGradesRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .save_grades(&req, grades.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/submissions")
            .route("", web::put().to(update_submission))
            .route("/grades", web::put().to(save_grades))
            .route("/{assignment_id}", web::get().to(list_submissions)),
    );
}
