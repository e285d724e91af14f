use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use rust_exam_grader::config::AppConfig;
use rust_exam_grader::models::AppStartTime;
use rust_exam_grader::routes;
use rust_exam_grader::runtime::lifetime;
use rust_exam_grader::utils::{form_error_handler, query_error_handler};

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
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        System: {}
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = match lifetime::startup::prepare_server_startup().await {
        Ok(startup) => startup,
        Err(e) => {
            error!("Pre-startup processing failed: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    let storage = startup.storage.clone();
    let shutdown = startup.shutdown.clone();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    warn!("Using {} worker(s) for the server", config.server.workers);

    let app_shutdown = shutdown.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler)) // 设置查询参数错误处理器
            .app_data(
                web::FormConfig::default()
                    .limit(config.server.limits.max_payload_size)
                    .error_handler(form_error_handler),
            ) // 设置表单错误处理器
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(app_shutdown.clone()))
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            )) // 设置最大请求体大小
            .configure(routes::configure_evaluation_routes) // 配置成绩相关路由
            .configure(routes::configure_api_routes) // 配置 JSON 接口
            .configure(routes::configure_system_routes) // 配置系统相关路由
            .configure(routes::configure_asset_routes) // 配置静态资源路由
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
    .workers(config.server.workers)
    .disable_signals(); // 信号由 listen_for_shutdown 统一处理

    let bind_address = config.server_bind_address();
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(bind_address)?.run();
    let handle = server.handle();
    let mut server_task = actix_web::rt::spawn(server);

    if config.app.open_browser {
        lifetime::browser::open_in_browser(&config.browser_url());
    }

    tokio::select! {
        res = &mut server_task => {
            res.map_err(std::io::Error::other)??;
        }
        _ = lifetime::shutdown::listen_for_shutdown(shutdown) => {
            // 等待正在处理的请求（包括 /end 的响应）完成
            handle.stop(true).await;
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
