//! 考勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ISO 日期 YYYY-MM-DD
    pub date: String,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub status: String,
    pub period: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};

        AttendanceRecord {
            id: self.id,
            date: self.date,
            student_id: self.student_id,
            student_name: self.student_name,
            class_name: self.class_name,
            status: AttendanceStatus::from_code(&self.status).unwrap_or(AttendanceStatus::Absent),
            period: self.period,
        }
    }
}
