use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::timetable::requests::CreateTimetableEntryRequest;
use crate::services::TimetableService;
use crate::utils::SafeTimetableId;

// 懒加载的全局 TimetableService 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

pub async fn list_entries(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_entries(&req).await
}

pub async fn week_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.week_view(&req).await
}

pub async fn grid_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.grid_view(&req).await
}

pub async fn create_entry(
    req: HttpRequest,
    entry: web::Json<CreateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.create_entry(&req, entry.into_inner()).await
}

pub async fn delete_entry(req: HttpRequest, entry_id: SafeTimetableId) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_entry(&req, entry_id.0).await
}

// 配置路由
pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/timetable")
            .service(
                web::resource("")
                    .route(web::get().to(list_entries))
                    .route(web::post().to(create_entry)),
            )
            // 视图路由需在 /{entry_id} 之前注册
            .route("/week", web::get().to(week_view))
            .route("/grid", web::get().to(grid_view))
            .route("/{entry_id}", web::delete().to(delete_entry)),
    );
}
