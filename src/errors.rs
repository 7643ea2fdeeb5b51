//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 同时实现 `ResponseError`，服务层可直接把错误转换为 JSON 响应。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::{ApiError, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edumate_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduMateError {
            $($variant(String),)*
        }

        impl EduMateError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduMateError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduMateError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduMateError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduMateError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduMateError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edumate_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Resource Conflict"),
    ClassLookup("E007", "Class Lookup Error"),
    Authentication("E008", "Authentication Error"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    MailDelivery("E011", "Mail Delivery Error"),
    MailerPluginNotFound("E012", "Mailer Plugin Not Found"),
    PasswordHash("E013", "Password Hash Error"),
}

impl EduMateError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的 API 错误码
    pub fn api_code(&self) -> ErrorCode {
        match self {
            EduMateError::Validation(_) => ErrorCode::ValidationFailed,
            EduMateError::DateParse(_) => ErrorCode::InvalidDate,
            EduMateError::Authentication(_) => ErrorCode::InvalidCredentials,
            EduMateError::NotFound(_) => ErrorCode::NotFound,
            EduMateError::Conflict(_) => ErrorCode::Conflict,
            EduMateError::ClassLookup(_) => ErrorCode::ClassNameMismatch,
            EduMateError::MailDelivery(_) | EduMateError::MailerPluginNotFound(_) => {
                ErrorCode::MailDeliveryFailed
            }
            _ => ErrorCode::InternalServerError,
        }
    }
}

impl fmt::Display for EduMateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduMateError {}

impl ResponseError for EduMateError {
    fn status_code(&self) -> StatusCode {
        match self {
            EduMateError::Validation(_) | EduMateError::DateParse(_) => StatusCode::BAD_REQUEST,
            EduMateError::Authentication(_) => StatusCode::UNAUTHORIZED,
            EduMateError::NotFound(_) => StatusCode::NOT_FOUND,
            EduMateError::Conflict(_) => StatusCode::CONFLICT,
            EduMateError::ClassLookup(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 客户端只看到消息本身，类型名称留给日志
        HttpResponse::build(self.status_code()).json(ApiError::new(self.api_code(), self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduMateError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduMateError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EduMateError {
    fn from(err: std::io::Error) -> Self {
        EduMateError::DatabaseConfig(err.to_string())
    }
}

impl From<serde_json::Error> for EduMateError {
    fn from(err: serde_json::Error) -> Self {
        EduMateError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduMateError {
    fn from(err: chrono::ParseError) -> Self {
        EduMateError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduMateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduMateError::database_config("test").code(), "E001");
        assert_eq!(EduMateError::validation("test").code(), "E004");
        assert_eq!(EduMateError::class_lookup("test").code(), "E007");
        assert_eq!(EduMateError::password_hash("test").code(), "E013");
        assert_eq!(EduMateError::mailer_plugin_not_found("test").code(), "E012");
        assert_eq!(
            EduMateError::mailer_plugin_not_found("test").api_code(),
            ErrorCode::MailDeliveryFailed
        );
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduMateError::class_lookup("test").error_type(),
            "Class Lookup Error"
        );
        assert_eq!(
            EduMateError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = EduMateError::not_found("Student not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Student not found"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            EduMateError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EduMateError::date_parse("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EduMateError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            EduMateError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EduMateError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            EduMateError::class_lookup("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            EduMateError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_err_conversion() {
        let err: EduMateError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
