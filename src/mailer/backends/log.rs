use async_trait::async_trait;
use tracing::info;

use crate::declare_mailer_plugin;
use crate::errors::Result;
use crate::mailer::{EmailMessage, Mailer};

declare_mailer_plugin!("log", LogMailer);

/// 只记录日志、不真正投递的邮件后端（默认）
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait]
impl Mailer for LogMailer {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, email: &EmailMessage) -> Result<()> {
        info!(
            to = %email.to_email,
            student = %email.student_name,
            class = %email.class_name,
            "Email notification: {}",
            email.message
        );
        Ok(())
    }
}
