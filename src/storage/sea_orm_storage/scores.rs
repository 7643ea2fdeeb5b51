//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::scores::{ActiveModel, Column, Entity as Scores};
use crate::errors::{EduMateError, Result};
use crate::models::scores::entities::Score;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出某次考试的全部成绩
    pub async fn list_scores_by_exam_impl(&self, exam_id: &str) -> Result<Vec<Score>> {
        let result = Scores::find()
            .filter(Column::ExamId.eq(exam_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_score()).collect())
    }

    /// 列出某个学生的全部成绩
    pub async fn list_scores_by_student_impl(&self, student_id: &str) -> Result<Vec<Score>> {
        let result = Scores::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_score()).collect())
    }

    /// 批量写入成绩，(exam_id, student_id) 已存在时覆盖
    pub async fn upsert_scores_impl(&self, scores: Vec<Score>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        let mut saved = 0;
        for score in scores {
            let existing = Scores::find()
                .filter(Column::ExamId.eq(&score.exam_id))
                .filter(Column::StudentId.eq(&score.student_id))
                .one(&txn)
                .await
                .map_err(|e| EduMateError::database_operation(format!("查询成绩失败: {e}")))?;

            match existing {
                Some(row) => {
                    let mut model = row.into_active_model();
                    model.marks_obtained = Set(score.marks);
                    if model.is_changed() {
                        model.update(&txn).await.map_err(|e| {
                            EduMateError::database_operation(format!("更新成绩失败: {e}"))
                        })?;
                    }
                }
                None => {
                    let model = ActiveModel {
                        exam_id: Set(score.exam_id),
                        student_id: Set(score.student_id),
                        marks_obtained: Set(score.marks),
                        ..Default::default()
                    };
                    model.insert(&txn).await.map_err(|e| {
                        EduMateError::database_operation(format!("写入成绩失败: {e}"))
                    })?;
                }
            }
            saved += 1;
        }

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(saved)
    }
}
