use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::{
    AttendanceMark, AttendanceQuery, AttendanceRosterQuery, AttendanceSummaryQuery,
};
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&req, query.into_inner())
        .await
}

pub async fn mark_attendance(
    req: HttpRequest,
    marks: web::Json<Vec<AttendanceMark>>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(&req, marks.into_inner())
        .await
}

pub async fn summarize_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceSummaryQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .summarize_attendance(&req, query.into_inner())
        .await
}

pub async fn roster_for_subject(
    req: HttpRequest,
    query: web::Query<AttendanceRosterQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .roster_for_subject(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/attendance")
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(web::post().to(mark_attendance)),
            )
            .route("/summary", web::get().to(summarize_attendance))
            .route("/roster", web::get().to(roster_for_subject)),
    );
}
