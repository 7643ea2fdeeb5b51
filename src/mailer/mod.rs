//! 邮件通知
//!
//! 通知与作业发布后向范围内的学生逐个发送邮件。后端通过插件表选择，
//! 找不到或初始化失败时回退到只写日志的 `log` 后端。发送不重试。

pub mod backends;
pub mod register;

use async_trait::async_trait;
use futures_util::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{EduMateError, Result};
use crate::models::students::entities::Student;

/// 一封待发送的邮件
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub to_email: String,
    pub student_name: String,
    pub class_name: String,
    pub message: String,
    pub from_name: String,
    pub reply_to: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// 后端名称
    fn name(&self) -> &'static str;

    /// 发送单封邮件
    async fn send(&self, email: &EmailMessage) -> Result<()>;
}

/// 发件人信息
#[derive(Debug, Clone)]
pub struct Sender {
    pub from_name: String,
    pub reply_to: String,
}

impl Sender {
    pub fn from_config() -> Self {
        let mail = &AppConfig::get().mail;
        Self {
            from_name: mail.from_name.clone(),
            reply_to: mail.reply_to.clone(),
        }
    }
}

/// 为名单中邮箱有效的学生生成邮件，其余静默跳过
pub fn compose_messages(
    students: &[Student],
    class_name: &str,
    message: &str,
    sender: &Sender,
) -> Vec<EmailMessage> {
    students
        .iter()
        .filter(|s| s.has_deliverable_email())
        .map(|s| EmailMessage {
            to_email: s.email.trim().to_string(),
            student_name: s.name.clone(),
            class_name: class_name.to_string(),
            message: message.to_string(),
            from_name: sender.from_name.clone(),
            reply_to: sender.reply_to.clone(),
        })
        .collect()
}

/// 并发发送全部邮件，返回成功的数量
pub async fn dispatch_all(mailer: &dyn Mailer, messages: &[EmailMessage]) -> usize {
    if messages.is_empty() {
        return 0;
    }

    let results = join_all(messages.iter().map(|m| mailer.send(m))).await;

    let mut sent = 0;
    for (message, result) in messages.iter().zip(results) {
        match result {
            Ok(()) => sent += 1,
            Err(e) => warn!("Failed to send email to {}: {}", message.to_email, e),
        }
    }

    debug!(
        "Mailer '{}' delivered {}/{} emails",
        mailer.name(),
        sent,
        messages.len()
    );
    sent
}

/// 按名称创建邮件后端，失败时回退到日志后端
pub async fn create_mailer(backend: &str) -> Arc<dyn Mailer> {
    warn!("Attempting to create {} mailer backend", backend);

    if let Some(constructor) = register::get_mailer_plugin(backend) {
        match constructor().await {
            Ok(mailer) => {
                warn!("Successfully created {} mailer backend", backend);
                return Arc::from(mailer);
            }
            Err(e) => {
                warn!("Failed to create {} mailer: {}", backend, e);
            }
        }
    } else {
        let err = EduMateError::mailer_plugin_not_found(format!(
            "Mailer backend '{backend}' not found in registry"
        ));
        warn!("{}", err.format_simple());
    }

    warn!("Falling back to log mailer");
    Arc::new(backends::LogMailer)
}
