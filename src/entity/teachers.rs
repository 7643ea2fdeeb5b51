//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(column_type = "Text")]
    pub notepad: String,
    pub profile_pic: String,
    pub phone: String,
    pub gender: String,
    pub birthday: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::Teacher;
        use chrono::{DateTime, Utc};

        Teacher {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            notepad: self.notepad,
            profile_pic: self.profile_pic,
            phone: self.phone,
            gender: self.gender,
            birthday: self.birthday,
            subject: self.subject,
            address: self.address,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
