//! 考试存储操作

use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::entity::scores;
use crate::errors::{EduMateError, Result};
use crate::models::exams::entities::Exam;
use crate::utils::id::{EXAM_PREFIX, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出考试
    pub async fn list_exams_impl(&self) -> Result<Vec<Exam>> {
        let result = Exams::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询考试列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 创建考试
    pub async fn create_exam_impl(
        &self,
        title: &str,
        total_marks: i32,
        class_id: Option<String>,
    ) -> Result<Exam> {
        let model = ActiveModel {
            id: Set(generate_id(EXAM_PREFIX)),
            title: Set(title.to_string()),
            total_marks: Set(total_marks),
            class_id: Set(class_id),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, exam_id: &str) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(exam_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 删除考试及其成绩
    pub async fn delete_exam_impl(&self, exam_id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        scores::Entity::delete_many()
            .filter(scores::Column::ExamId.eq(exam_id))
            .exec(&txn)
            .await?;

        let result = Exams::delete_by_id(exam_id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("删除考试失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
