//! 班级名称解析
//!
//! 考勤、通知、作业、课程表都以班级名称引用班级，写入前统一在这里解析。

use std::sync::Arc;

use crate::errors::{EduMateError, Result};
use crate::models::classes::entities::Class;
use crate::models::notifications::entities::ALL_CLASSES;
use crate::storage::Storage;

/// 课程表科目与班级名称不一致时的提示
pub const CLASS_NAME_MISMATCH: &str = "Class name in Timetable must match Class List name exactly.";

/// 通知与作业的投递范围
#[derive(Debug, Clone)]
pub enum ClassScope {
    All,
    Single(Class),
}

/// 按名称精确匹配班级，找不到时返回 ClassLookup 错误
pub async fn resolve_class_name(storage: &Arc<dyn Storage>, name: &str) -> Result<Class> {
    match storage.get_class_by_name(name).await? {
        Some(class) => Ok(class),
        None => Err(EduMateError::class_lookup(format!("Class '{name}' does not exist"))),
    }
}

/// 解析 "All Classes" 或具体班级名称
pub async fn resolve_scope(storage: &Arc<dyn Storage>, class_name: &str) -> Result<ClassScope> {
    if class_name == ALL_CLASSES {
        return Ok(ClassScope::All);
    }
    resolve_class_name(storage, class_name)
        .await
        .map(ClassScope::Single)
}
