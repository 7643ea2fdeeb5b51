//! 课程表实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub day: String,
    pub time: String,
    /// 与班级名称对应
    pub subject: String,
    pub teacher: String,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_entry(self) -> crate::models::timetable::entities::TimetableEntry {
        use crate::models::timetable::entities::TimetableEntry;

        TimetableEntry {
            id: self.id,
            day: self.day,
            time: self.time,
            subject: self.subject,
            teacher: self.teacher,
            location: self.location,
        }
    }
}
