use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::entities::{STATUS_DAY_SCHOLAR, STATUS_HOSTELLER, is_valid_status};
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiError, ErrorCode};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
    mut update: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(resp) = validate_update(&mut update) {
        return Ok(resp);
    }

    match storage.update_student(&student_id, update).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(student))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiError::new(ErrorCode::StudentNotFound, "Student not found"))),
        Err(e) => {
            error!("Student update failed: {}", e);
            Ok(e.error_response())
        }
    }
}

/// 姓名、学号不能改为空，状态只能取两个枚举值
fn validate_update(update: &mut UpdateStudentRequest) -> Result<(), HttpResponse> {
    for (field, value) in [("name", update.name.as_mut()), ("roll", update.roll.as_mut())] {
        if let Some(value) = value {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                return Err(HttpResponse::BadRequest().json(ApiError::new(
                    ErrorCode::ValidationFailed,
                    format!("{field} must not be empty"),
                )));
            }
            *value = trimmed;
        }
    }

    if let Some(status) = update.status.as_deref()
        && !is_valid_status(status)
    {
        return Err(HttpResponse::BadRequest().json(ApiError::new(
            ErrorCode::ValidationFailed,
            format!("status must be '{STATUS_DAY_SCHOLAR}' or '{STATUS_HOSTELLER}'"),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_status() {
        let mut update = UpdateStudentRequest {
            status: Some("Boarder".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&mut update).is_err());
    }

    #[test]
    fn test_trims_name_and_keeps_valid_status() {
        let mut update = UpdateStudentRequest {
            name: Some("  Asha ".to_string()),
            status: Some(STATUS_HOSTELLER.to_string()),
            ..Default::default()
        };
        assert!(validate_update(&mut update).is_ok());
        assert_eq!(update.name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_rejects_blank_roll() {
        let mut update = UpdateStudentRequest {
            roll: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&mut update).is_err());
    }
}
