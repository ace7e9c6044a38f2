use actix_cors::Cors;
use actix_web::http::{Method, header::HeaderName};
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::str::FromStr;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use tutorhub::config::AppConfig;
use tutorhub::models::AppStartTime;
use tutorhub::routes;
use tutorhub::runtime::lifetime;

/// 按配置构建 CORS：仅允许前端来源并携带凭据
fn build_cors(config: &AppConfig) -> Cors {
    let methods: Vec<Method> = config
        .cors
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_str(&m.to_ascii_uppercase()).ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .cors
        .allowed_headers
        .iter()
        .filter_map(|h| HeaderName::from_str(h).ok())
        .collect();

    Cors::default()
        .allowed_origin(&config.cors.frontend_url)
        .allowed_methods(methods)
        .allowed_headers(headers)
        .supports_credentials()
        .max_age(config.cors.max_age)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志（RUST_LOG 优先于配置文件）
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_production() {
        tracing_builder.json().init();
    } else {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_server_startup().await;

    let storage = startup.storage.clone();
    let cache = startup.cache.clone();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    warn!("Using {} CPU cores for the server", config.server.workers);
    warn!("CORS allowed origin: {}", config.cors.frontend_url);

    // Start the HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .configure(routes::configure_app(
                storage.clone(),
                cache.clone(),
                app_start_time.clone(),
            ))
    })
    .keep_alive(std::time::Duration::from_secs(
        config.server.timeouts.keep_alive,
    )) // 启用长连接
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    )) // 客户端超时
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    )) // 断连超时
    .workers(config.server.workers);

    let server = {
        #[cfg(unix)]
        {
            if let Some(socket_path) = config.unix_socket_path() {
                warn!("Starting server on Unix socket: {}", socket_path);
                if std::path::Path::new(socket_path).exists() {
                    std::fs::remove_file(socket_path)?;
                }
                server.bind_uds(socket_path)?
            } else {
                let bind_address = config.server_bind_address();
                warn!("Starting server at http://{}", bind_address);
                server.bind(bind_address)?
            }
        }

        #[cfg(not(unix))]
        {
            let bind_address = config.server_bind_address();
            warn!("Starting server at http://{}", bind_address);
            server.bind(bind_address)?
        }
    }
    .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
