//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    /// "All Classes" 或班级名称
    pub class_name: String,
    pub due_date: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub file_url: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::Assignment;

        Assignment {
            id: self.id,
            title: self.title,
            class_name: self.class_name,
            due_date: self.due_date,
            description: self.description,
            file_url: self.file_url,
            created_at: self.created_at,
        }
    }
}
