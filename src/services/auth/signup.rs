use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::errors::EduMateError;
use crate::models::{ApiError, ErrorCode, auth::requests::SignupRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{require_field, validate_email};

pub async fn handle_signup(
    service: &AuthService,
    signup_request: SignupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 校验必填字段
    let name = match require_field(&signup_request.name, "name") {
        Ok(name) => name,
        Err(e) => return Ok(e.error_response()),
    };
    let email = match require_field(&signup_request.email, "email") {
        Ok(email) => email.to_lowercase(),
        Err(e) => return Ok(e.error_response()),
    };
    if signup_request.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiError::new(
            ErrorCode::ValidationFailed,
            "password is required",
        )));
    }
    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest().json(ApiError::new(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 邮箱唯一
    match storage.get_teacher_by_email(&email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to look up teacher by email: {}", e);
            return Ok(e.error_response());
        }
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&signup_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(e.error_response());
        }
    };

    // 4. 创建教师
    match storage.create_teacher(&name, &email, &password_hash).await {
        Ok(teacher) => {
            info!("Teacher {} signed up", teacher.id);
            Ok(HttpResponse::Created().json(teacher))
        }
        // 并发注册时由唯一索引兜底
        Err(EduMateError::Conflict(_)) => {
            Ok(HttpResponse::Conflict().json(ApiError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            )))
        }
        Err(e) => {
            error!("Teacher signup failed: {}", e);
            Ok(e.error_response())
        }
    }
}
