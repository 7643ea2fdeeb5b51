use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::students::entities::Student;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: String,
    // 班级名称，考勤、通知、作业、课程表均以此名称引用
    pub name: String,
    // 班主任姓名
    pub coordinator_name: String,
    // 班主任电话
    pub coordinator_phone: String,
    // 学生名单（花名册顺序）
    pub students: Vec<Student>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
