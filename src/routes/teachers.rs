use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::{NotepadRequest, UpdateTeacherRequest};
use crate::services::TeacherService;
use crate::utils::SafeTeacherId;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn get_teacher(req: HttpRequest, teacher_id: SafeTeacherId) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherId,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_id.0, update_data.into_inner())
        .await
}

pub async fn save_notepad(
    req: HttpRequest,
    teacher_id: SafeTeacherId,
    notepad: web::Json<NotepadRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .save_notepad(&req, teacher_id.0, notepad.into_inner())
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teacher")
            .service(
                web::resource("/{teacher_id}")
                    .route(web::get().to(get_teacher))
                    .route(web::put().to(update_teacher)),
            )
            .route("/{teacher_id}/notepad", web::put().to(save_notepad)),
    );
}
