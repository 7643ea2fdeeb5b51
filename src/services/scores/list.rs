use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::ScoreService;
use crate::models::scores::requests::ScoreQuery;

pub async fn list_scores(
    service: &ScoreService,
    request: &HttpRequest,
    query: ScoreQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some(exam_id) = query.exam_id.filter(|id| !id.trim().is_empty()) else {
        return Ok(HttpResponse::Ok().json(Vec::<()>::new()));
    };

    match storage.list_scores_by_exam(exam_id.trim()).await {
        Ok(scores) => Ok(HttpResponse::Ok().json(scores)),
        Err(e) => Ok(e.error_response()),
    }
}
