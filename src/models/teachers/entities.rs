use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 教师账号及个人资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    // 密码哈希永不序列化
    #[serde(skip)]
    #[ts(skip)]
    pub password_hash: String,
    pub notepad: String,
    pub profile_pic: String,
    pub phone: String,
    pub gender: String,
    pub birthday: String,
    pub subject: String,
    pub address: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
