use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Teachers::Notepad).text().not_null().default(""))
                    .col(ColumnDef::new(Teachers::ProfilePic).string().not_null().default(""))
                    .col(ColumnDef::new(Teachers::Phone).string().not_null().default(""))
                    .col(ColumnDef::new(Teachers::Gender).string().not_null().default(""))
                    .col(ColumnDef::new(Teachers::Birthday).string().not_null().default(""))
                    .col(ColumnDef::new(Teachers::Subject).string().not_null().default(""))
                    .col(ColumnDef::new(Teachers::Address).text().not_null().default(""))
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::CoordinatorName).string().not_null())
                    .col(
                        ColumnDef::new(Classes::CoordinatorPhone)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::ClassId).string_len(80).not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Roll).string_len(20).not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Students::Status)
                            .string_len(50)
                            .not_null()
                            .default("Day Scholar"),
                    )
                    .col(ColumnDef::new(Students::Phone).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Students::ParentPhone)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Students::ParentEmail)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Students::Address).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Students::PreviousMarks)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Students::ProfilePic)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Students::Notes).text().not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Timetable::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timetable::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Timetable::Day).string_len(20).not_null())
                    .col(ColumnDef::new(Timetable::Time).string_len(20).not_null())
                    .col(ColumnDef::new(Timetable::Subject).string().not_null())
                    .col(ColumnDef::new(Timetable::Teacher).string().not_null().default(""))
                    .col(ColumnDef::new(Timetable::Location).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::ClassName).string().not_null())
                    .col(ColumnDef::new(Notifications::Timestamp).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Notifications::PostedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::Date).string_len(20).not_null())
                    .col(ColumnDef::new(Attendance::StudentId).string_len(80).not_null())
                    .col(ColumnDef::new(Attendance::StudentName).string().not_null())
                    .col(ColumnDef::new(Attendance::ClassName).string().not_null())
                    .col(ColumnDef::new(Attendance::Status).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Attendance::Period)
                            .string_len(50)
                            .not_null()
                            .default("Period 1"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Exams::TotalMarks).integer().not_null())
                    .col(ColumnDef::new(Exams::ClassId).string_len(80).null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scores::ExamId).string_len(80).not_null())
                    .col(ColumnDef::new(Scores::StudentId).string_len(80).not_null())
                    .col(
                        ColumnDef::new(Scores::MarksObtained)
                            .string_len(20)
                            .not_null()
                            .default("0"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::ClassName).string().not_null())
                    .col(ColumnDef::new(Assignments::DueDate).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Assignments::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Assignments::FileUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Assignments::CreatedAt).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .string_len(80)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::StudentId).string_len(80).not_null())
                    .col(
                        ColumnDef::new(Submissions::FileUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Submissions::SubmissionDate)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Submissions::Status)
                            .string_len(20)
                            .not_null()
                            .default("Not Submitted"),
                    )
                    .col(ColumnDef::new(Submissions::Grade).string_len(20).not_null().default(""))
                    .col(ColumnDef::new(Submissions::Feedback).text().not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Timetable::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Notepad,
    ProfilePic,
    Phone,
    Gender,
    Birthday,
    Subject,
    Address,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    CoordinatorName,
    CoordinatorPhone,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    ClassId,
    Name,
    Roll,
    Email,
    Status,
    Phone,
    ParentPhone,
    ParentEmail,
    Address,
    PreviousMarks,
    ProfilePic,
    Notes,
}

#[derive(DeriveIden)]
pub(crate) enum Timetable {
    #[sea_orm(iden = "timetable")]
    Table,
    Id,
    Day,
    Time,
    Subject,
    Teacher,
    Location,
}

#[derive(DeriveIden)]
pub(crate) enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    Message,
    ClassName,
    Timestamp,
    PostedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    Date,
    StudentId,
    StudentName,
    ClassName,
    Status,
    Period,
}

#[derive(DeriveIden)]
pub(crate) enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    Title,
    TotalMarks,
    ClassId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Scores {
    #[sea_orm(iden = "scores")]
    Table,
    Id,
    ExamId,
    StudentId,
    MarksObtained,
}

#[derive(DeriveIden)]
pub(crate) enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    Title,
    ClassName,
    DueDate,
    Description,
    FileUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    FileUrl,
    SubmissionDate,
    Status,
    Grade,
    Feedback,
}
