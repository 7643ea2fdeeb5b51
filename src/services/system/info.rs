use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::Utc;

use super::SystemService;
use crate::models::AppStartTime;
use crate::models::system::responses::SystemInfoResponse;

pub async fn get_info(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 未注入启动时间时按当前时间计算
    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| start.start_datetime)
        .unwrap_or_else(Utc::now);

    Ok(HttpResponse::Ok().json(SystemInfoResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_seconds: (Utc::now() - started_at).num_seconds(),
    }))
}
