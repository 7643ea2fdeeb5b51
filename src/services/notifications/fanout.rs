//! 通知邮件投递
//!
//! 通知和作业共用：先按范围取学生，再为邮箱可用的学生逐个发送。

use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::mailer::{Mailer, Sender, compose_messages, dispatch_all};
use crate::models::students::entities::Student;
use crate::services::classes::lookup::ClassScope;
use crate::storage::Storage;

/// 范围内的全部学生
pub async fn students_in_scope(storage: &Arc<dyn Storage>, scope: &ClassScope) -> Result<Vec<Student>> {
    match scope {
        ClassScope::All => storage.list_all_students().await,
        ClassScope::Single(class) => Ok(class.students.clone()),
    }
}

/// 发送邮件并返回成功条数
pub async fn notify_students(
    mailer: &Arc<dyn Mailer>,
    students: &[Student],
    class_name: &str,
    message: &str,
) -> usize {
    let messages = compose_messages(students, class_name, message, &Sender::from_config());
    let skipped = students.len() - messages.len();
    let sent = dispatch_all(mailer.as_ref(), &messages).await;
    info!(
        "Notification fan-out for {}: {} sent, {} failed, {} skipped without email",
        class_name,
        sent,
        messages.len() - sent,
        skipped
    );
    sent
}
