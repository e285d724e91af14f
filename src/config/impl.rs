use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 内置默认值，配置文件和环境变量都缺失时也能启动
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.system_name", "Exam Grader")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("app.open_browser", true)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 4)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 65536)?
            .set_default("grading.exam_title", "Englischarbeit")?
            .set_default("grading.export_file_name", "bewertungen.pdf")?
            .set_default("grading.write_export_copy", false)?
            .set_default("storage.type", "memory")
    }

    /// 只使用内置默认值构建配置
    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::finalize(Self::defaults()?.build()?.try_deserialize()?)
    }

    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，例如 GRADER_SERVER__PORT=8080
            .add_source(
                Environment::with_prefix("GRADER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("app.open_browser", std::env::var("OPEN_BROWSER").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?;

        Self::finalize(builder.build()?.try_deserialize()?)
    }

    fn finalize(mut app_config: AppConfig) -> Result<Self, ConfigError> {
        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers).max(1);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 浏览器访问地址
    pub fn browser_url(&self) -> String {
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.server.port)
    }
}
