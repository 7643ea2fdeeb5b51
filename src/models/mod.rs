pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod exams;
pub mod notifications;
pub mod scores;
pub mod students;
pub mod submissions;
pub mod system;
pub mod teachers;
pub mod timetable;

pub use common::{ApiError, ErrorCode, MessageResponse};

/// 程序启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
