use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::services::AssignmentService;
use crate::utils::SafeAssignmentId;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_assignments(&req).await
}

pub async fn create_assignment(
    req: HttpRequest,
    assignment: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, assignment.into_inner())
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentId,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, assignment_id.0)
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/assignments")
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .route("/{assignment_id}", web::delete().to(delete_assignment)),
    );
}
