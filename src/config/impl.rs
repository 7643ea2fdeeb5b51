use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 常用环境变量到配置键的映射
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SEED_DEMO_DATA", "app.seed_demo_data"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("DATABASE_URL", "database.url"),
    ("MAIL_BACKEND", "mail.backend"),
    ("EMAILJS_SERVICE_ID", "mail.emailjs.service_id"),
    ("EMAILJS_TEMPLATE_ID", "mail.emailjs.template_id"),
    ("EMAILJS_PUBLIC_KEY", "mail.emailjs.public_key"),
];

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            .add_source(
                Environment::with_prefix("EDUMATE")
                    .separator("__")
                    .try_parsing(true),
            );
        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.validate()?;

        // 0 表示按 CPU 核数，受 max_workers 限制
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers).max(1);
        }

        Ok(app_config)
    }

    /// 启动前拒绝明显无效的配置
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message("database.url must not be empty".into()));
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::Message("database.pool_size must be at least 1".into()));
        }
        if self.mail.backend.trim().is_empty() {
            return Err(ConfigError::Message("mail.backend must not be empty".into()));
        }
        Ok(())
    }

    /// 全局配置，未初始化时按默认来源加载
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_env_overrides_are_unique() {
        let vars: HashSet<_> = ENV_OVERRIDES.iter().map(|(var, _)| var).collect();
        let keys: HashSet<_> = ENV_OVERRIDES.iter().map(|(_, key)| key).collect();
        assert_eq!(vars.len(), ENV_OVERRIDES.len());
        assert_eq!(keys.len(), ENV_OVERRIDES.len());
    }

    #[test]
    fn test_default_config_file_loads() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.app.system_name, "EduMate");
        assert!(config.server.workers >= 1);
        assert!(config.validate().is_ok());
    }
}
