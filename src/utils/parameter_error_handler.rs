//! JSON 请求体与查询参数的解析错误处理
//!
//! 将 actix 默认的纯文本错误替换为统一的 `{"error", "code"}` 响应体。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiError, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid JSON payload on {}: {}", req.path(), err);
    let response = match &err {
        JsonPayloadError::ContentType => HttpResponse::UnsupportedMediaType().json(ApiError::new(
            ErrorCode::InvalidJson,
            "Content-Type must be application/json",
        )),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            HttpResponse::PayloadTooLarge().json(ApiError::new(
                ErrorCode::InvalidJson,
                "Request body is too large",
            ))
        }
        _ => HttpResponse::BadRequest().json(ApiError::new(
            ErrorCode::InvalidJson,
            format!("Invalid JSON body: {err}"),
        )),
    };
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid query string on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiError::new(
        ErrorCode::InvalidQuery,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
