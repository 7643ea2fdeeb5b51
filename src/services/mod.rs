pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod exams;
pub mod notifications;
pub mod scores;
pub mod students;
pub mod submissions;
pub mod system;
pub mod teachers;
pub mod timetable;

use actix_web::{HttpRequest, Result as ActixResult, web};
use std::sync::Arc;

use crate::mailer::Mailer;
use crate::storage::Storage;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use exams::ExamService;
pub use notifications::NotificationService;
pub use scores::ScoreService;
pub use students::StudentService;
pub use submissions::SubmissionService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use timetable::TimetableService;

/// 从 app_data 中取出存储句柄
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 从 app_data 中取出邮件后端
pub(crate) fn mailer_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Mailer>> {
    request
        .app_data::<web::Data<Arc<dyn Mailer>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Mailer not found in app data"))
}
