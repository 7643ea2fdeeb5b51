//! 路径参数安全提取器
//!
//! 路径中的实体 ID 只允许字母和数字，且长度不超过 80，否则直接返回 400。

use actix_web::{HttpResponse, error::InternalError};

use crate::models::{ApiError, ErrorCode};

/// 路径 ID 的最大长度
pub const MAX_PATH_ID_LEN: usize = 80;

pub fn is_safe_id(raw: &str) -> bool {
    !raw.is_empty() && raw.len() <= MAX_PATH_ID_LEN && raw.chars().all(|c| c.is_ascii_alphanumeric())
}

/// 校验路径 ID，失败时生成 400 响应
pub fn validate_path_id(raw: &str, param: &str) -> Result<String, actix_web::Error> {
    if is_safe_id(raw) {
        Ok(raw.to_string())
    } else {
        let message = format!("Invalid path parameter '{param}'");
        let response =
            HttpResponse::BadRequest().json(ApiError::new(ErrorCode::InvalidPathId, &message));
        Err(InternalError::from_response(message, response).into())
    }
}

/// 定义路径 ID 提取器
#[macro_export]
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub String);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                futures_util::future::ready(
                    $crate::utils::extractor::validate_path_id(raw, $param).map($name),
                )
            }
        }
    };
}

define_safe_id_extractor!(SafeTeacherId, "teacher_id");
define_safe_id_extractor!(SafeClassId, "class_id");
define_safe_id_extractor!(SafeStudentId, "student_id");
define_safe_id_extractor!(SafeTimetableId, "entry_id");
define_safe_id_extractor!(SafeExamId, "exam_id");
define_safe_id_extractor!(SafeAssignmentId, "assignment_id");
