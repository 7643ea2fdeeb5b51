//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::errors::{EduMateError, Result};
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceQuery, NormalizedAttendance},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量写入考勤，(date, student_id) 已存在时覆盖
    pub async fn upsert_attendance_impl(&self, records: Vec<NormalizedAttendance>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduMateError::database_operation(format!("开启事务失败: {e}")))?;

        let mut saved = 0;
        for record in records {
            let existing = Attendance::find()
                .filter(Column::Date.eq(&record.date))
                .filter(Column::StudentId.eq(&record.student_id))
                .one(&txn)
                .await
                .map_err(|e| EduMateError::database_operation(format!("查询考勤失败: {e}")))?;

            match existing {
                Some(row) => {
                    let mut model = row.into_active_model();
                    model.student_name = Set(record.student_name);
                    model.class_name = Set(record.class_name);
                    model.status = Set(record.status.code().to_string());
                    model.period = Set(record.period);
                    if model.is_changed() {
                        model.update(&txn).await.map_err(|e| {
                            EduMateError::database_operation(format!("更新考勤失败: {e}"))
                        })?;
                    }
                }
                None => {
                    let model = ActiveModel {
                        date: Set(record.date),
                        student_id: Set(record.student_id),
                        student_name: Set(record.student_name),
                        class_name: Set(record.class_name),
                        status: Set(record.status.code().to_string()),
                        period: Set(record.period),
                        ..Default::default()
                    };
                    model.insert(&txn).await.map_err(|e| {
                        EduMateError::database_operation(format!("写入考勤失败: {e}"))
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

    /// 按日期和/或学生查询考勤
    pub async fn list_attendance_impl(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        let mut select = Attendance::find();

        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let result = select
            .order_by_asc(Column::Date)
            .order_by_asc(Column::ClassName)
            .order_by_asc(Column::StudentName)
            .all(&self.db)
            .await
            .map_err(|e| EduMateError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_record()).collect())
    }
}
