use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn get_info(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_info(&request).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/system")
            .wrap(middleware::Compress::default())
            .route("/info", web::get().to(get_info)),
    );
}
