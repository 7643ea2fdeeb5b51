use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API 错误码，随错误响应体一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/error_code.ts")]
#[repr(i32)]
pub enum ErrorCode {
    // 通用请求错误 1000+
    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidJson = 1002,
    InvalidQuery = 1003,
    InvalidPathId = 1004,
    InvalidDate = 1005,

    // 认证 2000+
    InvalidCredentials = 2001,

    // 资源不存在 4000+
    NotFound = 4000,
    TeacherNotFound = 4001,
    ClassNotFound = 4002,
    StudentNotFound = 4003,
    TimetableEntryNotFound = 4004,
    ExamNotFound = 4005,
    AssignmentNotFound = 4006,
    SubmissionNotFound = 4007,

    // 冲突 4090+
    Conflict = 4090,
    EmailAlreadyRegistered = 4091,

    // 班级名称引用无法解析 4220+
    ClassNameMismatch = 4220,
    StudentClassMismatch = 4221,

    // 服务器内部错误 5000+
    InternalServerError = 5000,
    MailDeliveryFailed = 5001,
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes() {
        assert_eq!(i32::from(ErrorCode::ValidationFailed), 1001);
        assert_eq!(i32::from(ErrorCode::ClassNotFound), 4002);
        assert_eq!(i32::from(ErrorCode::ClassNameMismatch), 4220);
    }
}
