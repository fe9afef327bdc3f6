use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEFAULTS: &[(&str, &str)] = &[
    ("app.system_name", "CourseHub"),
    ("app.environment", "development"),
    ("app.log_level", "info"),
    ("server.host", "127.0.0.1"),
    ("server.port", "8080"),
    ("server.unix_socket_path", ""),
    ("server.workers", "0"),
    ("server.max_workers", "16"),
    ("server.timeouts.client_request", "5000"),
    ("server.timeouts.client_disconnect", "1000"),
    ("server.timeouts.keep_alive", "30"),
    ("server.limits.max_payload_size", "1048576"),
    ("jwt.secret", "coursehub-development-secret"),
    ("jwt.access_token_expiry", "15"),
    ("jwt.refresh_token_expiry", "7"),
    ("jwt.refresh_token_remember_me_expiry", "30"),
    ("database.url", "coursehub.db"),
    ("database.pool_size", "8"),
    ("database.timeout", "10"),
    ("cache.default_ttl", "300"),
    ("cache.max_capacity", "10000"),
    ("cors.max_age", "3600"),
    ("argon2.memory_cost", "19456"),
    ("argon2.time_cost", "2"),
    ("argon2.parallelism", "1"),
];

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 内置默认值，保证配置文件缺失时也能启动
        for (key, value) in DEFAULTS {
            builder = builder.set_default(*key, *value)?;
        }

        builder = builder
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("cors.allowed_methods", vec!["GET", "POST", "PUT", "DELETE"])?
            .set_default("cors.allowed_headers", vec!["Authorization", "Content-Type"])?
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
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("LMS")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
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

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否允许任意来源跨域
    pub fn cors_allow_any_origin(&self) -> bool {
        self.cors.allowed_origins.iter().any(|o| o == "*")
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_defaults() {
        let config = AppConfig::load().expect("defaults should deserialize");
        assert!(!config.jwt.secret.is_empty());
        assert!(config.server.workers > 0);
        assert!(config.database.pool_size > 0);
        assert!(config.argon2.time_cost >= 1);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::load().expect("defaults should deserialize");
        assert_eq!(
            config.server_bind_address(),
            format!("{}:{}", config.server.host, config.server.port)
        );
    }
}
