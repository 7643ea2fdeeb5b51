use crate::config::AppConfig;
use crate::errors::Result;
use crate::mailer::{Mailer, create_mailer, register::debug_mailer_registry};
use crate::models::classes::requests::CreateClassRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 演示教师账号
const DEMO_TEACHER_NAME: &str = "Demo Teacher";
const DEMO_TEACHER_EMAIL: &str = "teacher@edumate.local";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn Mailer>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 空库时写入演示教师和一个示例班级
async fn seed_demo_data(storage: &Arc<dyn Storage>) {
    match storage.count_teachers().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} teacher(s), skipping demo seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No teachers found in database, creating demo data...");
        }
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping demo seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("DEMO_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  DEMO PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Demo teacher: {}", DEMO_TEACHER_EMAIL);
        warn!("  Generated password: {}", pwd);
        warn!("  Please save this password or set DEMO_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash demo password: {}, skipping demo seed", e);
            return;
        }
    };

    match storage
        .create_teacher(DEMO_TEACHER_NAME, DEMO_TEACHER_EMAIL, &password_hash)
        .await
    {
        Ok(teacher) => info!("Demo teacher created (ID: {})", teacher.id),
        Err(e) => {
            warn!("Failed to create demo teacher: {}", e);
            return;
        }
    }

    let sample_class = CreateClassRequest {
        name: "10A".to_string(),
        coordinator_name: DEMO_TEACHER_NAME.to_string(),
        coordinator_phone: None,
    };
    match storage.create_class(sample_class).await {
        Ok(class) => info!("Sample class {} created (ID: {})", class.name, class.id),
        Err(e) => warn!("Failed to create sample class: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储、演示数据和邮件后端
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 重复安装时返回 Err，可以忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider was already installed");
    }

    let config = AppConfig::get();

    if cfg!(debug_assertions) {
        debug_mailer_registry();
        debug!("Debug mode: Mailer registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    if config.app.seed_demo_data {
        seed_demo_data(&storage).await;
    }

    // 邮件后端不可用时回退到日志后端
    let mailer = create_mailer(&config.mail.backend).await;
    warn!("Mailer backend '{}' initialized", mailer.name());

    Ok(StartupContext { storage, mailer })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_password() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }
}
