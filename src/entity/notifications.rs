//! 通知实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub class_name: String,
    /// 展示用时间字符串
    pub timestamp: String,
    /// 仅用于排序的 Unix 时间戳
    pub posted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_notification(self) -> crate::models::notifications::entities::Notification {
        use crate::models::notifications::entities::Notification;

        Notification {
            id: self.id,
            message: self.message,
            class_name: self.class_name,
            timestamp: self.timestamp,
        }
    }
}
