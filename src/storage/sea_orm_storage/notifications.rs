//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{EduMateError, Result};
use crate::models::notifications::entities::Notification;
use crate::utils::id::{NOTIFICATION_PREFIX, generate_id};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按发布顺序列出通知
    pub async fn list_notifications_impl(&self) -> Result<Vec<Notification>> {
        let result = Notifications::find()
            .order_by_asc(Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 发布通知
    pub async fn create_notification_impl(
        &self,
        message: &str,
        class_name: &str,
        timestamp: &str,
    ) -> Result<Notification> {
        let model = ActiveModel {
            id: Set(generate_id(NOTIFICATION_PREFIX)),
            message: Set(message.to_string()),
            class_name: Set(class_name.to_string()),
            timestamp: Set(timestamp.to_string()),
            // 微秒精度，同一秒内发布的通知也保持先后顺序
            posted_at: Set(chrono::Utc::now().timestamp_micros()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("发布通知失败: {e}")))?;

        Ok(result.into_notification())
    }
}
