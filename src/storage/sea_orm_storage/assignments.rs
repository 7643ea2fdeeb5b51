//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::submissions;
use crate::errors::{EduMateError, Result};
use crate::models::assignments::entities::Assignment;
use crate::storage::NewAssignment;
use crate::utils::id::{ASSIGNMENT_PREFIX, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出作业（按截止日期排序由视图层完成）
    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .order_by_asc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 创建作业
    pub async fn create_assignment_impl(&self, assignment: NewAssignment) -> Result<Assignment> {
        let model = ActiveModel {
            id: Set(generate_id(ASSIGNMENT_PREFIX)),
            title: Set(assignment.title),
            class_name: Set(assignment.class_name),
            due_date: Set(assignment.due_date),
            description: Set(assignment.description),
            file_url: Set(assignment.file_url),
            created_at: Set(assignment.created_at),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 删除作业及其提交记录
    pub async fn delete_assignment_impl(&self, assignment_id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        submissions::Entity::delete_many()
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .exec(&txn)
            .await?;

        let result = Assignments::delete_by_id(assignment_id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("删除作业失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
