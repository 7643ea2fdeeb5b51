//! 班级存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes, Model as ClassModel};
use crate::entity::{
    assignments, attendance, exams, notifications, scores, students, submissions, timetable,
};
use crate::errors::{EduMateError, Result};
use crate::models::{
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    students::entities::Student,
};
use crate::utils::compare_rolls;
use crate::utils::id::{CLASS_PREFIX, generate_id};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 按学号自然顺序排列
pub(crate) fn into_roster(models: Vec<students::Model>) -> Vec<Student> {
    let mut roster: Vec<Student> = models.into_iter().map(|m| m.into_student()).collect();
    roster.sort_by(|a, b| compare_rolls(&a.roll, &b.roll));
    roster
}

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ActiveModel {
            id: Set(generate_id(CLASS_PREFIX)),
            name: Set(req.name),
            coordinator_name: Set(req.coordinator_name),
            coordinator_phone: Set(req.coordinator_phone.unwrap_or_default()),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class(Vec::new()))
    }

    /// 列出所有班级，附带各自的学生名单
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询班级列表失败: {e}")))?;

        let all_students = students::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询学生列表失败: {e}")))?;

        // 按班级分组
        let mut grouped: HashMap<String, Vec<students::Model>> = HashMap::new();
        for student in all_students {
            grouped
                .entry(student.class_id.clone())
                .or_default()
                .push(student);
        }

        Ok(classes
            .into_iter()
            .map(|class| {
                let roster = into_roster(grouped.remove(&class.id).unwrap_or_default());
                class.into_class(roster)
            })
            .collect())
    }

    /// 加载班级的学生名单并转换为业务模型
    async fn with_roster<C: ConnectionTrait>(&self, conn: &C, class: ClassModel) -> Result<Class> {
        let members = class
            .find_related(students::Entity)
            .all(conn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(class.into_class(into_roster(members)))
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: &str) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询班级失败: {e}")))?;

        match result {
            Some(class) => Ok(Some(self.with_roster(&self.db, class).await?)),
            None => Ok(None),
        }
    }

    /// 通过名称获取班级（精确匹配）
    pub async fn get_class_by_name_impl(&self, name: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询班级失败: {e}")))?;

        match result {
            Some(class) => Ok(Some(self.with_roster(&self.db, class).await?)),
            None => Ok(None),
        }
    }

    /// 更新班级信息
    ///
    /// 班级名称在考勤、通知、作业和课程表中冗余存储，改名时在同一事务内全部同步。
    pub async fn update_class_impl(
        &self,
        class_id: &str,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Classes::find_by_id(class_id.to_string())
            .one(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(None);
        };

        let old_name = existing.name.clone();
        let mut model = existing.clone().into_active_model();

        if let Some(name) = update.name.clone() {
            model.name = Set(name);
        }
        if let Some(coordinator_name) = update.coordinator_name {
            model.coordinator_name = Set(coordinator_name);
        }
        if let Some(coordinator_phone) = update.coordinator_phone {
            model.coordinator_phone = Set(coordinator_phone);
        }

        let updated = if model.is_changed() {
            model
                .update(&txn)
                .await
                .map_err(|e| EduMateError::database_operation(format!("更新班级失败: {e}")))?
        } else {
            existing
        };

        if updated.name != old_name {
            let new_name = updated.name.clone();

            attendance::Entity::update_many()
                .col_expr(attendance::Column::ClassName, Expr::value(new_name.clone()))
                .filter(attendance::Column::ClassName.eq(&old_name))
                .exec(&txn)
                .await?;
            notifications::Entity::update_many()
                .col_expr(notifications::Column::ClassName, Expr::value(new_name.clone()))
                .filter(notifications::Column::ClassName.eq(&old_name))
                .exec(&txn)
                .await?;
            assignments::Entity::update_many()
                .col_expr(assignments::Column::ClassName, Expr::value(new_name.clone()))
                .filter(assignments::Column::ClassName.eq(&old_name))
                .exec(&txn)
                .await?;
            timetable::Entity::update_many()
                .col_expr(timetable::Column::Subject, Expr::value(new_name.clone()))
                .filter(timetable::Column::Subject.eq(&old_name))
                .exec(&txn)
                .await?;

            tracing::info!("Class renamed from '{}' to '{}'", old_name, new_name);
        }

        let class = self.with_roster(&txn, updated).await?;

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(class))
    }

    /// 删除班级，连带删除学生、考试以及相关的成绩、考勤和提交记录
    pub async fn delete_class_impl(&self, class_id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        if Classes::find_by_id(class_id.to_string())
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let student_ids: Vec<String> = students::Entity::find()
            .filter(students::Column::ClassId.eq(class_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let exam_ids: Vec<String> = exams::Entity::find()
            .filter(exams::Column::ClassId.eq(class_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|e| e.id)
            .collect();

        scores::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(scores::Column::StudentId.is_in(student_ids.clone()))
                    .add(scores::Column::ExamId.is_in(exam_ids)),
            )
            .exec(&txn)
            .await?;
        attendance::Entity::delete_many()
            .filter(attendance::Column::StudentId.is_in(student_ids.clone()))
            .exec(&txn)
            .await?;
        submissions::Entity::delete_many()
            .filter(submissions::Column::StudentId.is_in(student_ids))
            .exec(&txn)
            .await?;
        students::Entity::delete_many()
            .filter(students::Column::ClassId.eq(class_id))
            .exec(&txn)
            .await?;
        exams::Entity::delete_many()
            .filter(exams::Column::ClassId.eq(class_id))
            .exec(&txn)
            .await?;

        let result = Classes::delete_by_id(class_id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| EduMateError::database_operation(format!("删除班级失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduMateError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
