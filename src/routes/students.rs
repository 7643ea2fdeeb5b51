use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{StudentNotesRequest, UpdateStudentRequest};
use crate::services::StudentService;
use crate::utils::SafeStudentId;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentId,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeStudentId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

pub async fn save_notes(
    req: HttpRequest,
    student_id: SafeStudentId,
    notes: web::Json<StudentNotesRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .save_notes(&req, student_id.0, notes.into_inner())
        .await
}

pub async fn get_analytics(req: HttpRequest, student_id: SafeStudentId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_analytics(&req, student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .service(
                web::resource("/{student_id}")
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            )
            .route("/{student_id}/notes", web::put().to(save_notes))
            .route("/{student_id}/analytics", web::get().to(get_analytics)),
    );
}
