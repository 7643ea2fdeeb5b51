use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};

use super::AttendanceService;
use crate::errors::{EduMateError, Result};
use crate::models::attendance::entities::DEFAULT_PERIOD;
use crate::models::attendance::requests::{AttendanceMark, NormalizedAttendance};
use crate::models::attendance::responses::AttendanceSavedResponse;
use crate::models::classes::entities::Class;
use crate::models::{ApiError, ErrorCode};
use crate::services::classes::lookup::resolve_class_name;
use crate::storage::Storage;
use crate::utils::validate::normalize_date;

/// 单条记录的校验失败
enum MarkRejection {
    Error(EduMateError),
    StudentNotFound(String),
    NotInClass { student_id: String, class_name: String },
}

impl From<EduMateError> for MarkRejection {
    fn from(err: EduMateError) -> Self {
        MarkRejection::Error(err)
    }
}

pub async fn mark_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    marks: Vec<AttendanceMark>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let records = match normalize_marks(&storage, marks).await {
        Ok(records) => records,
        Err(MarkRejection::Error(e)) => return Ok(e.error_response()),
        Err(MarkRejection::StudentNotFound(student_id)) => {
            return Ok(HttpResponse::NotFound().json(ApiError::new(
                ErrorCode::StudentNotFound,
                format!("Student {student_id} not found"),
            )));
        }
        Err(MarkRejection::NotInClass {
            student_id,
            class_name,
        }) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiError::new(
                ErrorCode::StudentClassMismatch,
                format!("Student {student_id} is not in class {class_name}"),
            )));
        }
    };

    match storage.upsert_attendance(records).await {
        Ok(saved) => {
            info!("Saved {} attendance records", saved);
            Ok(HttpResponse::Created().json(AttendanceSavedResponse {
                msg: "Saved".to_string(),
                saved,
            }))
        }
        Err(e) => {
            error!("Failed to save attendance: {}", e);
            Ok(e.error_response())
        }
    }
}

/// 解析班级、核对学生归属并规范化日期与课时，任意一条失败则整批拒绝
async fn normalize_marks(
    storage: &Arc<dyn Storage>,
    marks: Vec<AttendanceMark>,
) -> std::result::Result<Vec<NormalizedAttendance>, MarkRejection> {
    let mut classes: HashMap<String, Class> = HashMap::new();
    let mut records = Vec::with_capacity(marks.len());

    for mark in marks {
        let class_name = mark.class_name.trim().to_string();
        if !classes.contains_key(&class_name) {
            let class = resolve_class_name(storage, &class_name).await?;
            classes.insert(class_name.clone(), class);
        }
        let class = &classes[&class_name];

        let student_id = mark.student_id.trim().to_string();
        let Some(student) = class.students.iter().find(|s| s.id == student_id) else {
            return Err(reject_missing_student(storage, student_id, class_name).await);
        };

        records.push(NormalizedAttendance {
            date: normalize_date(&mark.date)?,
            student_id: student.id.clone(),
            // 以学生表为准刷新冗余姓名
            student_name: student.name.clone(),
            class_name: class.name.clone(),
            status: mark.status,
            period: mark
                .period
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
        });
    }

    Ok(records)
}

/// 区分学生不存在与学生不属于该班级
async fn reject_missing_student(
    storage: &Arc<dyn Storage>,
    student_id: String,
    class_name: String,
) -> MarkRejection {
    let found: Result<_> = storage.get_student_by_id(&student_id).await;
    match found {
        Ok(Some(_)) => MarkRejection::NotInClass {
            student_id,
            class_name,
        },
        Ok(None) => MarkRejection::StudentNotFound(student_id),
        Err(e) => MarkRejection::Error(e),
    }
}
