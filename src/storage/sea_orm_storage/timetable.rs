//! 课程表存储操作

use super::SeaOrmStorage;
use crate::entity::timetable::{ActiveModel, Column, Entity as Timetable};
use crate::errors::{EduMateError, Result};
use crate::models::timetable::entities::TimetableEntry;
use crate::storage::NewTimetableEntry;
use crate::utils::id::{TIMETABLE_PREFIX, generate_id};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出课程表（原始顺序由视图层再排序）
    pub async fn list_timetable_impl(&self) -> Result<Vec<TimetableEntry>> {
        let result = Timetable::find()
            .order_by_asc(Column::Time)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询课程表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_entry()).collect())
    }

    /// 创建课程表条目
    pub async fn create_timetable_entry_impl(
        &self,
        entry: NewTimetableEntry,
    ) -> Result<TimetableEntry> {
        let model = ActiveModel {
            id: Set(generate_id(TIMETABLE_PREFIX)),
            day: Set(entry.day),
            time: Set(entry.time),
            subject: Set(entry.subject),
            teacher: Set(entry.teacher),
            location: Set(entry.location),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("创建课程表条目失败: {e}")))?;

        Ok(result.into_entry())
    }

    /// 删除课程表条目
    pub async fn delete_timetable_entry_impl(&self, entry_id: &str) -> Result<bool> {
        let result = Timetable::delete_by_id(entry_id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("删除课程表条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
