use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;

use edumate::config::{AppConfig, CorsConfig};
use edumate::models::AppStartTime;
use edumate::routes;
use edumate::runtime::lifetime;
use edumate::utils::{json_error_handler, query_error_handler};

/// 开发环境输出带文件位置的文本日志，其余环境输出 JSON
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .with_level(true);

    if config.is_development() {
        builder
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        builder.json().init();
    }
    guard
}

/// 按配置构建 CORS，"*" 表示不限制
fn build_cors(cors: &CorsConfig) -> Cors {
    let wildcard = |values: &[String]| values.iter().any(|v| v == "*");

    let mut policy = Cors::default().max_age(cors.max_age);
    policy = if wildcard(&cors.allowed_origins) {
        policy.allow_any_origin()
    } else {
        cors.allowed_origins
            .iter()
            .fold(policy, |p, origin| p.allowed_origin(origin))
    };
    policy = if wildcard(&cors.allowed_methods) {
        policy.allow_any_method()
    } else {
        policy.allowed_methods(cors.allowed_methods.iter().map(String::as_str))
    };
    if wildcard(&cors.allowed_headers) {
        policy.allow_any_header()
    } else {
        policy.allowed_headers(cors.allowed_headers.iter().map(String::as_str))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();

    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    AppConfig::init().map_err(|e| {
        std::io::Error::other(format!("Failed to initialize configuration: {e}"))
    })?;
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    warn!(
        "Starting {} v{} ({} environment)",
        config.app.system_name,
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| std::io::Error::other(e.format_simple()))?;
    let storage = startup.storage;
    let mailer = startup.mailer;

    debug!(
        "Startup completed in {} ms, mail backend '{}'",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds(),
        mailer.name()
    );
    warn!("Using {} worker threads", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config.cors))
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add((
                "Keep-Alive",
                format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
            )))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(routes::configure_api_routes)
            // 前端兜底必须最后注册
            .configure(routes::configure_frontend_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = match config.unix_socket_path() {
        Some(socket_path) => {
            warn!("Listening on Unix socket {}", socket_path);
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            server.bind_uds(socket_path)?
        }
        None => {
            warn!("Listening on http://{}", config.server_bind_address());
            server.bind(config.server_bind_address())?
        }
    };

    #[cfg(not(unix))]
    let server = {
        warn!("Listening on http://{}", config.server_bind_address());
        server.bind(config.server_bind_address())?
    };

    tokio::select! {
        res = server.run() => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Shutdown signal received, stopping EduMate");
        }
    }

    Ok(())
}
