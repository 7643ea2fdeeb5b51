use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::scores::requests::{ScoreEntry, ScoreQuery};
use crate::services::ScoreService;

// 懒加载的全局 ScoreService 实例
static SCORE_SERVICE: Lazy<ScoreService> = Lazy::new(ScoreService::new_lazy);

pub async fn list_scores(
    req: HttpRequest,
    query: web::Query<ScoreQuery>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.list_scores(&req, query.into_inner()).await
}

pub async fn save_scores(
    req: HttpRequest,
    entries: web::Json<Vec<ScoreEntry>>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.save_scores(&req, entries.into_inner()).await
}

// 配置路由
pub fn configure_scores_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/scores").service(
            web::resource("")
                .route(web::get().to(list_scores))
                .route(web::post().to(save_scores)),
        ),
    );
}
