use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::exams::requests::{CreateExamRequest, ScoreSheetQuery};
use crate::services::ExamService;
use crate::utils::SafeExamId;

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_exams(req: HttpRequest) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req).await
}

pub async fn create_exam(
    req: HttpRequest,
    exam: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(&req, exam.into_inner()).await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeExamId) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, exam_id.0).await
}

pub async fn score_sheet(
    req: HttpRequest,
    exam_id: SafeExamId,
    query: web::Query<ScoreSheetQuery>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .score_sheet(&req, exam_id.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/exams")
            .service(
                web::resource("")
                    .route(web::get().to(list_exams))
                    .route(web::post().to(create_exam)),
            )
            .route("/{exam_id}", web::delete().to(delete_exam))
            .route("/{exam_id}/sheet", web::get().to(score_sheet)),
    );
}
