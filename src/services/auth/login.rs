use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::AuthService;
use crate::models::{ApiError, ErrorCode, auth::requests::LoginRequest};
use crate::utils::password::verify_password;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let email = login_request.email.trim().to_lowercase();

    // 未知邮箱与错误密码返回相同的响应
    match storage.get_teacher_by_email(&email).await {
        Ok(Some(teacher)) if verify_password(&login_request.password, &teacher.password_hash) => {
            tracing::info!("Teacher {} logged in successfully", teacher.id);
            Ok(HttpResponse::Ok().json(teacher))
        }
        Ok(_) => Ok(HttpResponse::Unauthorized().json(ApiError::new(
            ErrorCode::InvalidCredentials,
            "Invalid credentials",
        ))),
        Err(e) => {
            tracing::error!("Failed to look up teacher during login: {}", e);
            Ok(e.error_response())
        }
    }
}
