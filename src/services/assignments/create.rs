use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use chrono::Utc;
use tracing::{error, info};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::assignments::responses::AssignmentCreatedResponse;
use crate::services::classes::lookup::resolve_scope;
use crate::services::notifications::create::display_timestamp;
use crate::services::notifications::fanout::{notify_students, students_in_scope};
use crate::storage::NewAssignment;
use crate::utils::validate::require_field;

/// 布置作业时生成的通知文本
pub fn assignment_notice(title: &str, due_date: &str) -> String {
    format!("New assignment: {title} (due {due_date})")
}

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let mailer = service.get_mailer(request)?;

    // 1. 必填字段
    let title = match require_field(&assignment.title, "title") {
        Ok(title) => title,
        Err(e) => return Ok(e.error_response()),
    };
    let class_name = match require_field(&assignment.class_name, "className") {
        Ok(name) => name,
        Err(e) => return Ok(e.error_response()),
    };
    let due_date = match require_field(&assignment.due_date, "dueDate") {
        Ok(due) => due,
        Err(e) => return Ok(e.error_response()),
    };

    // 2. 投递范围
    let scope = match resolve_scope(&storage, &class_name).await {
        Ok(scope) => scope,
        Err(e) => return Ok(e.error_response()),
    };

    // 3. 保存作业
    let new_assignment = NewAssignment {
        title,
        class_name,
        due_date,
        description: assignment.description.unwrap_or_default(),
        file_url: assignment.file_url.unwrap_or_default().trim().to_string(),
        created_at: assignment
            .created_at
            .filter(|ts| !ts.trim().is_empty())
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
    };
    let created = match storage.create_assignment(new_assignment).await {
        Ok(created) => created,
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            return Ok(e.error_response());
        }
    };
    info!("Assignment {} created for {}", created.id, created.class_name);

    // 4. 发布通知并发送邮件，失败只记录日志
    let notice = assignment_notice(&created.title, &created.due_date);
    if let Err(e) = storage
        .create_notification(&notice, &created.class_name, &display_timestamp())
        .await
    {
        error!("Failed to post notification for assignment {}: {}", created.id, e);
    }
    let students = match students_in_scope(&storage, &scope).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to load recipients for assignment {}: {}", created.id, e);
            Vec::new()
        }
    };
    let emails_sent = notify_students(&mailer, &students, &created.class_name, &notice).await;

    Ok(HttpResponse::Created().json(AssignmentCreatedResponse {
        assignment: created,
        notification_message: notice,
        emails_sent,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_notice() {
        assert_eq!(
            assignment_notice("Essay", "2025-03-10"),
            "New assignment: Essay (due 2025-03-10)"
        );
    }
}
