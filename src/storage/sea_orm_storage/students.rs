//! 学生存储操作

use super::SeaOrmStorage;
use super::classes::into_roster;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::{attendance, scores, submissions};
use crate::errors::{EduMateError, Result};
use crate::models::students::{
    entities::{STATUS_DAY_SCHOLAR, Student},
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::utils::id::{STUDENT_PREFIX, generate_id};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 向班级添加学生，其余字段为空，状态默认走读
    pub async fn create_student_impl(
        &self,
        class_id: &str,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let model = ActiveModel {
            id: Set(generate_id(STUDENT_PREFIX)),
            class_id: Set(class_id.to_string()),
            name: Set(req.name),
            roll: Set(req.roll),
            email: Set(String::new()),
            status: Set(STATUS_DAY_SCHOLAR.to_string()),
            phone: Set(String::new()),
            parent_phone: Set(String::new()),
            parent_email: Set(String::new()),
            address: Set(String::new()),
            previous_marks: Set(String::new()),
            profile_pic: Set(String::new()),
            notes: Set(String::new()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("添加学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生（花名册顺序）
    pub async fn list_all_students_impl(&self) -> Result<Vec<Student>> {
        let result = Students::find()
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(into_roster(result))
    }

    /// 更新学生信息，改名时同步考勤记录中的学生姓名
    pub async fn update_student_impl(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Students::find_by_id(student_id.to_string())
            .one(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let old_name = existing.name.clone();
        let mut model = existing.clone().into_active_model();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(roll) = update.roll {
            model.roll = Set(roll);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }
        if let Some(parent_phone) = update.parent_phone {
            model.parent_phone = Set(parent_phone);
        }
        if let Some(parent_email) = update.parent_email {
            model.parent_email = Set(parent_email);
        }
        if let Some(address) = update.address {
            model.address = Set(address);
        }
        if let Some(previous_marks) = update.previous_marks {
            model.previous_marks = Set(previous_marks);
        }
        if let Some(profile_pic) = update.profile_pic {
            model.profile_pic = Set(profile_pic);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_student()));
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("更新学生失败: {e}")))?;

        if updated.name != old_name {
            attendance::Entity::update_many()
                .col_expr(
                    attendance::Column::StudentName,
                    Expr::value(updated.name.clone()),
                )
                .filter(attendance::Column::StudentId.eq(student_id))
                .exec(&txn)
                .await?;
        }

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_student()))
    }

    /// 保存学生备注
    pub async fn update_student_notes_impl(
        &self,
        student_id: &str,
        notes: &str,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find_by_id(student_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.notes = Set(notes.to_string());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("保存学生备注失败: {e}")))?;

        Ok(Some(updated.into_student()))
    }

    /// 删除学生，连带删除成绩、考勤和提交记录
    pub async fn delete_student_impl(&self, student_id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        scores::Entity::delete_many()
            .filter(scores::Column::StudentId.eq(student_id))
            .exec(&txn)
            .await?;
        attendance::Entity::delete_many()
            .filter(attendance::Column::StudentId.eq(student_id))
            .exec(&txn)
            .await?;
        submissions::Entity::delete_many()
            .filter(submissions::Column::StudentId.eq(student_id))
            .exec(&txn)
            .await?;

        let result = Students::delete_by_id(student_id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("删除学生失败: {e}")))?;

        if result.rows_affected == 0 {
            // 学生不存在，放弃事务
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
