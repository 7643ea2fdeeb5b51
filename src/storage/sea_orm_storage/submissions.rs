//! 作业提交存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{EduMateError, Result};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::SubmissionChanges,
};
use crate::utils::id::{SUBMISSION_PREFIX, generate_id};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};

/// 插入 "Not Submitted" 占位行，(作业, 学生) 已存在的行跳过，返回实际插入的条数
///
/// 并发首次加载同一作业时，另一个请求可能已插入同一行，由唯一索引兜底。
async fn insert_placeholders<C: ConnectionTrait>(
    conn: &C,
    assignment_id: &str,
    student_ids: &[String],
) -> Result<usize> {
    let mut created = 0;
    for student_id in student_ids {
        let model = ActiveModel {
            id: Set(generate_id(SUBMISSION_PREFIX)),
            assignment_id: Set(assignment_id.to_string()),
            student_id: Set(student_id.clone()),
            file_url: Set(String::new()),
            submission_date: Set(String::new()),
            status: Set(SubmissionStatus::NotSubmitted.label().to_string()),
            grade: Set(String::new()),
            feedback: Set(String::new()),
        };
        let inserted = Submissions::insert(model)
            .on_conflict(
                OnConflict::columns([Column::AssignmentId, Column::StudentId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("补建提交记录失败: {e}")))?;
        created += inserted as usize;
    }
    Ok(created)
}

impl SeaOrmStorage {
    /// 列出某作业的提交记录
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询提交记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 为尚无提交记录的学生补建 "Not Submitted" 行
    pub async fn ensure_submissions_impl(
        &self,
        assignment_id: &str,
        student_ids: &[String],
    ) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        let existing: HashSet<String> = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .all(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询提交记录失败: {e}")))?
            .into_iter()
            .map(|m| m.student_id)
            .collect();

        let missing: Vec<String> = student_ids
            .iter()
            .filter(|id| !existing.contains(*id))
            .cloned()
            .collect();
        let created = insert_placeholders(&txn, assignment_id, &missing).await?;

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    /// 通过 ID 获取提交记录
    pub async fn get_submission_by_id_impl(&self, submission_id: &str) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询提交记录失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 更新提交记录，只写入提供的字段
    pub async fn update_submission_impl(
        &self,
        submission_id: &str,
        changes: SubmissionChanges,
    ) -> Result<Option<Submission>> {
        let Some(existing) = Submissions::find_by_id(submission_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询提交记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(grade) = changes.grade {
            model.grade = Set(grade);
        }
        if let Some(feedback) = changes.feedback {
            model.feedback = Set(feedback);
        }
        if let Some(status) = changes.status {
            model.status = Set(status.label().to_string());
        }
        if let Some(file_url) = changes.file_url {
            model.file_url = Set(file_url);
        }
        if let Some(submission_date) = changes.submission_date {
            model.submission_date = Set(submission_date);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_submission()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("更新提交记录失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }
}
