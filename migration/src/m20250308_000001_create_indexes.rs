use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::{Attendance, Scores, Students, Submissions};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_class_id")
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .to_owned(),
            )
            .await?;

        // 考勤 upsert 键：(date, student_id)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_attendance_date_student")
                    .table(Attendance::Table)
                    .col(Attendance::Date)
                    .col(Attendance::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 成绩 upsert 键：(exam_id, student_id)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_scores_exam_student")
                    .table(Scores::Table)
                    .col(Scores::ExamId)
                    .col(Scores::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每个 (作业, 学生) 只有一行提交记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_submissions_assignment_student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_submissions_assignment_student")
                    .table(Submissions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_scores_exam_student")
                    .table(Scores::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_attendance_date_student")
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_class_id")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
