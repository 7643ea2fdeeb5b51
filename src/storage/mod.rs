use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 新建作业时的字段
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub class_name: String,
    pub due_date: String,
    pub description: String,
    pub file_url: String,
    pub created_at: String,
}

/// 新建课程表条目时的字段（已校验、已规范化）
#[derive(Debug, Clone)]
pub struct NewTimetableEntry {
    pub day: String,
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub location: String,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师，password_hash 必须已经过哈希
    async fn create_teacher(&self, name: &str, email: &str, password_hash: &str)
    -> Result<Teacher>;
    // 通过ID获取教师
    async fn get_teacher_by_id(&self, id: &str) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 更新教师资料
    async fn update_teacher(&self, id: &str, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    // 保存记事本
    async fn update_teacher_notepad(&self, id: &str, notepad: &str) -> Result<bool>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 列出所有班级（含学生）
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 通过ID获取班级（含学生）
    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>>;
    // 通过名称获取班级（含学生），名称精确匹配
    async fn get_class_by_name(&self, name: &str) -> Result<Option<Class>>;
    // 更新班级，改名时同步冗余字段
    async fn update_class(&self, class_id: &str, update: UpdateClassRequest)
    -> Result<Option<Class>>;
    // 删除班级及其学生、考试、成绩、考勤
    async fn delete_class(&self, class_id: &str) -> Result<bool>;

    /// 学生管理方法
    // 向班级添加学生
    async fn create_student(&self, class_id: &str, student: CreateStudentRequest)
    -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, student_id: &str) -> Result<Option<Student>>;
    // 列出全部学生
    async fn list_all_students(&self) -> Result<Vec<Student>>;
    // 更新学生，改名时同步考勤中的学生姓名
    async fn update_student(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 保存学生备注
    async fn update_student_notes(&self, student_id: &str, notes: &str)
    -> Result<Option<Student>>;
    // 删除学生及其成绩、考勤、提交记录
    async fn delete_student(&self, student_id: &str) -> Result<bool>;

    /// 课程表方法
    async fn list_timetable(&self) -> Result<Vec<TimetableEntry>>;
    async fn create_timetable_entry(&self, entry: NewTimetableEntry) -> Result<TimetableEntry>;
    async fn delete_timetable_entry(&self, entry_id: &str) -> Result<bool>;

    /// 通知方法
    // 按发布顺序列出
    async fn list_notifications(&self) -> Result<Vec<Notification>>;
    async fn create_notification(
        &self,
        message: &str,
        class_name: &str,
        timestamp: &str,
    ) -> Result<Notification>;

    /// 考勤方法
    // 按 (date, student_id) 批量 upsert，返回写入条数
    async fn upsert_attendance(&self, records: Vec<NormalizedAttendance>) -> Result<usize>;
    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>>;

    /// 考试方法
    async fn list_exams(&self) -> Result<Vec<Exam>>;
    async fn create_exam(
        &self,
        title: &str,
        total_marks: i32,
        class_id: Option<String>,
    ) -> Result<Exam>;
    async fn get_exam_by_id(&self, exam_id: &str) -> Result<Option<Exam>>;
    // 删除考试及其成绩
    async fn delete_exam(&self, exam_id: &str) -> Result<bool>;

    /// 成绩方法
    async fn list_scores_by_exam(&self, exam_id: &str) -> Result<Vec<Score>>;
    async fn list_scores_by_student(&self, student_id: &str) -> Result<Vec<Score>>;
    // 按 (exam_id, student_id) 批量 upsert，返回写入条数
    async fn upsert_scores(&self, scores: Vec<Score>) -> Result<usize>;

    /// 作业方法
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, assignment_id: &str) -> Result<Option<Assignment>>;
    // 删除作业及其提交记录
    async fn delete_assignment(&self, assignment_id: &str) -> Result<bool>;

    /// 作业提交方法
    async fn list_submissions_by_assignment(&self, assignment_id: &str)
    -> Result<Vec<Submission>>;
    // 为缺少提交记录的学生补建 "Not Submitted" 行，返回新建条数
    async fn ensure_submissions(&self, assignment_id: &str, student_ids: &[String])
    -> Result<usize>;
    async fn get_submission_by_id(&self, submission_id: &str) -> Result<Option<Submission>>;
    async fn update_submission(
        &self,
        submission_id: &str,
        changes: SubmissionChanges,
    ) -> Result<Option<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
