//! EmailJS REST 后端
//!
//! 每位收件人一次 POST，模板参数与网页端 EmailJS SDK 发送的保持一致。

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::{AppConfig, EmailJsConfig};
use crate::declare_mailer_plugin;
use crate::errors::{EduMateError, Result};
use crate::mailer::{EmailMessage, Mailer};

declare_mailer_plugin!("emailjs", EmailJsMailer);

/// 共享的 HTTP 客户端
static HTTP_CLIENT: OnceCell<Client> = OnceCell::new();

fn get_http_client(timeout_secs: u64) -> Result<Client> {
    HTTP_CLIENT
        .get_or_try_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .map_err(|e| EduMateError::mail_delivery(format!("Failed to create HTTP client: {e}")))
        })
        .cloned()
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    student_name: &'a str,
    from_name: &'a str,
    reply_to: &'a str,
    class_name: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

pub struct EmailJsMailer {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsMailer {
    pub fn new() -> Result<Self> {
        Self::with_config(AppConfig::get().mail.emailjs.clone())
    }

    pub fn with_config(config: EmailJsConfig) -> Result<Self> {
        if config.service_id.is_empty()
            || config.template_id.is_empty()
            || config.public_key.is_empty()
        {
            return Err(EduMateError::mail_delivery(
                "EmailJS service_id, template_id and public_key must be configured",
            ));
        }

        let client = get_http_client(config.timeout)?;
        Ok(Self { client, config })
    }

    fn build_request<'a>(&'a self, email: &'a EmailMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                to_email: &email.to_email,
                student_name: &email.student_name,
                from_name: &email.from_name,
                reply_to: &email.reply_to,
                class_name: &email.class_name,
                message: &email.message,
            },
        }
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    async fn send(&self, email: &EmailMessage) -> Result<()> {
        debug!("Sending EmailJS message to {}", email.to_email);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.build_request(email))
            .send()
            .await
            .map_err(|e| EduMateError::mail_delivery(format!("EmailJS request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(EduMateError::mail_delivery(format!(
                "EmailJS returned {status}: {body}"
            )))
        }
    }
}
