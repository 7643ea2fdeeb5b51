//! 作业提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub file_url: String,
    pub submission_date: String,
    pub status: String,
    pub grade: String,
    #[sea_orm(column_type = "Text")]
    pub feedback: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus};

        Submission {
            id: self.id,
            assignment_id: self.assignment_id,
            student_id: self.student_id,
            file_url: self.file_url,
            submission_date: self.submission_date,
            status: SubmissionStatus::from_label(&self.status)
                .unwrap_or(SubmissionStatus::NotSubmitted),
            grade: self.grade,
            feedback: self.feedback,
        }
    }
}
