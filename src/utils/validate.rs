use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{EduMateError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> std::result::Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 必填字段：去除首尾空白后不能为空
pub fn require_field(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EduMateError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// 规范化日期为 ISO 格式，接受 YYYY-MM-DD 与 MM/DD/YYYY
pub fn normalize_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|_| {
            EduMateError::date_parse(format!(
                "Invalid date '{raw}', expected YYYY-MM-DD or MM/DD/YYYY"
            ))
        })?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// 解析考试总分，接受 JSON 数字或数字字符串，必须大于 0
pub fn parse_total_marks(value: &Value) -> Result<i32> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(total) if total <= 0 => Err(EduMateError::validation(
            "totalMarks must be greater than 0",
        )),
        Some(total) => i32::try_from(total)
            .map_err(|_| EduMateError::validation("totalMarks is too large")),
        None => Err(EduMateError::validation(
            "totalMarks must be a whole number",
        )),
    }
}

/// 分数原样保存为字符串：数字转为其字符串形式，字符串去除首尾空白，空值拒绝
pub fn marks_to_string(value: &Value) -> Result<String> {
    let marks = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    };
    if marks.is_empty() {
        return Err(EduMateError::validation("marks must not be empty"));
    }
    Ok(marks)
}
