//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{EduMateError, Result};
use crate::models::teachers::{entities::Teacher, requests::UpdateTeacherRequest};
use crate::utils::id::{TEACHER_PREFIX, generate_id};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, Set,
    SqlErr,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Teacher> {
        let model = ActiveModel {
            id: Set(generate_id(TEACHER_PREFIX)),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            notepad: Set(String::new()),
            profile_pic: Set(String::new()),
            phone: Set(String::new()),
            gender: Set(String::new()),
            birthday: Set(String::new()),
            subject: Set(String::new()),
            address: Set(String::new()),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        // 并发注册同一邮箱时由唯一索引拒绝
        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                EduMateError::conflict("Email already registered")
            }
            _ => EduMateError::database_operation(format!("创建教师失败: {e}")),
        })?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过邮箱获取教师
    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 更新教师资料
    pub async fn update_teacher_impl(
        &self,
        id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = Teachers::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询教师失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(profile_pic) = update.profile_pic {
            model.profile_pic = Set(profile_pic);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }
        if let Some(gender) = update.gender {
            model.gender = Set(gender);
        }
        if let Some(birthday) = update.birthday {
            model.birthday = Set(birthday);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }
        if let Some(address) = update.address {
            model.address = Set(address);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_teacher()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("更新教师失败: {e}")))?;

        Ok(Some(updated.into_teacher()))
    }

    /// 保存记事本
    pub async fn update_teacher_notepad_impl(&self, id: &str, notepad: &str) -> Result<bool> {
        let result = Teachers::update_many()
            .col_expr(Column::Notepad, Expr::value(notepad.to_string()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("保存记事本失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("统计教师数量失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_duplicate_email_is_a_conflict() {
        let storage = SeaOrmStorage::connect(":memory:", 1, 5).await.unwrap();
        storage
            .create_teacher_impl("Ms. Rao", "rao@school.test", "hash")
            .await
            .unwrap();

        let err = storage
            .create_teacher_impl("Ms. Rao", "rao@school.test", "hash")
            .await
            .unwrap_err();
        assert!(matches!(err, EduMateError::Conflict(_)));
        assert_eq!(err.message(), "Email already registered");
    }
}
