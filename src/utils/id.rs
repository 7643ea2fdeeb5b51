//! 实体 ID 生成
//!
//! ID 由类型前缀加 v4 UUID 的前 8 位十六进制字符组成，例如 `c1a2b3c4d`。

use uuid::Uuid;

pub const TEACHER_PREFIX: &str = "t";
pub const CLASS_PREFIX: &str = "c";
pub const STUDENT_PREFIX: &str = "s";
pub const TIMETABLE_PREFIX: &str = "tt";
pub const NOTIFICATION_PREFIX: &str = "n";
pub const EXAM_PREFIX: &str = "e";
pub const ASSIGNMENT_PREFIX: &str = "a";
pub const SUBMISSION_PREFIX: &str = "sub";

pub fn generate_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &uuid[..8])
}
