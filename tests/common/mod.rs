#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use serde_json::{Value, json};

use edumate::errors::Result;
use edumate::mailer::{EmailMessage, Mailer};
use edumate::routes;
use edumate::storage::Storage;
use edumate::storage::sea_orm_storage::SeaOrmStorage;
use edumate::utils::{json_error_handler, query_error_handler};

/// 记录所有发送请求的邮件后端
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, email: &EmailMessage) -> Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestContext {
    /// 每个测试独立的内存数据库
    pub async fn new() -> Self {
        let storage = SeaOrmStorage::connect("sqlite::memory:", 1, 5)
            .await
            .expect("in-memory database should open");
        Self {
            storage: Arc::new(storage),
            mailer: Arc::new(RecordingMailer::default()),
        }
    }

    /// 与 main.rs 相同的 app_data 与 API 路由
    pub fn configure(&self) -> impl FnOnce(&mut web::ServiceConfig) + 'static {
        let storage = self.storage.clone();
        let mailer: Arc<dyn Mailer> = self.mailer.clone();
        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(mailer));
            routes::configure_api_routes(cfg);
        }
    }
}

/// 发送请求并把响应体解析为 JSON
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// 注册教师的请求体
pub fn signup_body(email: &str) -> Value {
    json!({ "name": "Ms. Rao", "email": email, "password": "chalk-and-board" })
}

/// 建班请求体
pub fn class_body(name: &str) -> Value {
    json!({ "name": name, "coordinatorName": "Mr. Iyer", "coordinatorPhone": "555-0101" })
}
