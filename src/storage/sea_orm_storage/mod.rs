//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod classes;
mod exams;
mod notifications;
mod scores;
mod students;
mod submissions;
mod teachers;
mod timetable;

use crate::config::AppConfig;
use crate::errors::{EduMateError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// 从配置的 URL 推断出的数据库后端
#[derive(Debug, PartialEq)]
enum DatabaseUrl {
    Sqlite(String),
    Server(String),
}

impl DatabaseUrl {
    /// 接受完整 URL、`:memory:` 或 .db/.sqlite 文件路径
    fn parse(url: &str) -> Result<Self> {
        const SERVER_SCHEMES: [&str; 4] = ["postgres://", "postgresql://", "mysql://", "mariadb://"];

        if url.starts_with("sqlite:") {
            Ok(Self::Sqlite(url.to_string()))
        } else if url == ":memory:" {
            Ok(Self::Sqlite("sqlite::memory:".to_string()))
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(Self::Sqlite(format!("sqlite://{url}?mode=rwc")))
        } else if SERVER_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            Ok(Self::Server(url.to_string()))
        } else {
            Err(EduMateError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let database = &AppConfig::get().database;
        Self::connect(&database.url, database.pool_size, database.timeout).await
    }

    /// 连接数据库并把表结构迁移到最新版本
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db = match DatabaseUrl::parse(url)? {
            DatabaseUrl::Sqlite(url) => Self::connect_sqlite(&url, pool_size, timeout).await?,
            DatabaseUrl::Server(url) => Self::connect_server(&url, pool_size, timeout).await?,
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| EduMateError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("EduMate 数据库就绪 ({:?})", db.get_database_backend());
        Ok(Self { db })
    }

    /// SQLite：开启外键约束，级联删除依赖它
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduMateError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(timeout));

        // 内存库的每个连接都是独立的数据库，只能保留一个常驻连接
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
                .max_connections(pool_size)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(options)
            .await
            .map_err(|e| EduMateError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL / MySQL
    async fn connect_server(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut options = ConnectOptions::new(url);
        options
            .max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .sqlx_logging(false);

        Database::connect(options)
            .await
            .map_err(|e| EduMateError::database_connection(format!("无法连接到数据库: {e}")))
    }
}

// Storage trait 实现
use crate::models::{
    assignments::entities::Assignment,
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceQuery, NormalizedAttendance},
    },
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    exams::entities::Exam,
    notifications::entities::Notification,
    scores::entities::Score,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    submissions::{entities::Submission, requests::SubmissionChanges},
    teachers::{entities::Teacher, requests::UpdateTeacherRequest},
    timetable::entities::TimetableEntry,
};
use crate::storage::{NewAssignment, NewTimetableEntry, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_teacher(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Teacher> {
        self.create_teacher_impl(name, email, password_hash).await
    }

    async fn get_teacher_by_id(&self, id: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_email_impl(email).await
    }

    async fn update_teacher(
        &self,
        id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn update_teacher_notepad(&self, id: &str, notepad: &str) -> Result<bool> {
        self.update_teacher_notepad_impl(id, notepad).await
    }

    async fn count_teachers(&self) -> Result<u64> {
        self.count_teachers_impl().await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_name(&self, name: &str) -> Result<Option<Class>> {
        self.get_class_by_name_impl(name).await
    }

    async fn update_class(
        &self,
        class_id: &str,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: &str) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 学生模块
    async fn create_student(
        &self,
        class_id: &str,
        student: CreateStudentRequest,
    ) -> Result<Student> {
        self.create_student_impl(class_id, student).await
    }

    async fn get_student_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn list_all_students(&self) -> Result<Vec<Student>> {
        self.list_all_students_impl().await
    }

    async fn update_student(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    async fn update_student_notes(
        &self,
        student_id: &str,
        notes: &str,
    ) -> Result<Option<Student>> {
        self.update_student_notes_impl(student_id, notes).await
    }

    async fn delete_student(&self, student_id: &str) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 课程表模块
    async fn list_timetable(&self) -> Result<Vec<TimetableEntry>> {
        self.list_timetable_impl().await
    }

    async fn create_timetable_entry(&self, entry: NewTimetableEntry) -> Result<TimetableEntry> {
        self.create_timetable_entry_impl(entry).await
    }

    async fn delete_timetable_entry(&self, entry_id: &str) -> Result<bool> {
        self.delete_timetable_entry_impl(entry_id).await
    }

    // 通知模块
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.list_notifications_impl().await
    }

    async fn create_notification(
        &self,
        message: &str,
        class_name: &str,
        timestamp: &str,
    ) -> Result<Notification> {
        self.create_notification_impl(message, class_name, timestamp)
            .await
    }

    // 考勤模块
    async fn upsert_attendance(&self, records: Vec<NormalizedAttendance>) -> Result<usize> {
        self.upsert_attendance_impl(records).await
    }

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(query).await
    }

    // 考试模块
    async fn list_exams(&self) -> Result<Vec<Exam>> {
        self.list_exams_impl().await
    }

    async fn create_exam(
        &self,
        title: &str,
        total_marks: i32,
        class_id: Option<String>,
    ) -> Result<Exam> {
        self.create_exam_impl(title, total_marks, class_id).await
    }

    async fn get_exam_by_id(&self, exam_id: &str) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(exam_id).await
    }

    async fn delete_exam(&self, exam_id: &str) -> Result<bool> {
        self.delete_exam_impl(exam_id).await
    }

    // 成绩模块
    async fn list_scores_by_exam(&self, exam_id: &str) -> Result<Vec<Score>> {
        self.list_scores_by_exam_impl(exam_id).await
    }

    async fn list_scores_by_student(&self, student_id: &str) -> Result<Vec<Score>> {
        self.list_scores_by_student_impl(student_id).await
    }

    async fn upsert_scores(&self, scores: Vec<Score>) -> Result<usize> {
        self.upsert_scores_impl(scores).await
    }

    // 作业模块
    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn delete_assignment(&self, assignment_id: &str) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 提交模块
    async fn list_submissions_by_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
            .await
    }

    async fn ensure_submissions(
        &self,
        assignment_id: &str,
        student_ids: &[String],
    ) -> Result<usize> {
        self.ensure_submissions_impl(assignment_id, student_ids)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: &str) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn update_submission(
        &self,
        submission_id: &str,
        changes: SubmissionChanges,
    ) -> Result<Option<Submission>> {
        self.update_submission_impl(submission_id, changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_inference() {
        assert_eq!(
            DatabaseUrl::parse("edumate.db").unwrap(),
            DatabaseUrl::Sqlite("sqlite://edumate.db?mode=rwc".to_string())
        );
        assert_eq!(
            DatabaseUrl::parse(":memory:").unwrap(),
            DatabaseUrl::Sqlite("sqlite::memory:".to_string())
        );
        assert_eq!(
            DatabaseUrl::parse("sqlite::memory:").unwrap(),
            DatabaseUrl::Sqlite("sqlite::memory:".to_string())
        );
        assert_eq!(
            DatabaseUrl::parse("postgres://u:p@localhost/db").unwrap(),
            DatabaseUrl::Server("postgres://u:p@localhost/db".to_string())
        );
        assert!(DatabaseUrl::parse("redis://localhost").is_err());
    }

    #[actix_web::test]
    async fn test_connect_in_memory_runs_migrations() {
        let storage = SeaOrmStorage::connect(":memory:", 1, 5).await.unwrap();
        assert_eq!(storage.count_teachers_impl().await.unwrap(), 0);
    }
}
