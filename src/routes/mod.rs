pub mod assignments;

pub mod attendance;

pub mod auth;

pub mod classes;

pub mod exams;

pub mod frontend;

pub mod notifications;

pub mod scores;

pub mod students;

pub mod submissions;

pub mod system;

pub mod teachers;

pub mod timetable;

pub use assignments::configure_assignments_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use exams::configure_exams_routes;
pub use frontend::configure_frontend_routes;
pub use notifications::configure_notifications_routes;
pub use scores::configure_scores_routes;
pub use students::configure_students_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teacher_routes;
pub use timetable::configure_timetable_routes;

use actix_web::web;

/// 注册全部 API 路由，前端路由需要最后注册
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_teacher_routes)
        .configure(configure_classes_routes)
        .configure(configure_students_routes)
        .configure(configure_timetable_routes)
        .configure(configure_notifications_routes)
        .configure(configure_attendance_routes)
        .configure(configure_exams_routes)
        .configure(configure_scores_routes)
        .configure(configure_assignments_routes)
        .configure(configure_submissions_routes)
        .configure(configure_system_routes);
}
