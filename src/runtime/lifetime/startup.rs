use actix_cors::Cors;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{ObjectCache, create_object_cache};
use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_initial_password;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@coursehub.local";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 按配置构建 CORS 中间件，每个 worker 调用一次
pub fn build_cors(app_config: &AppConfig) -> Cors {
    let config = &app_config.cors;
    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .supports_credentials()
        .max_age(config.max_age);

    if app_config.cors_allow_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个 STAFF 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default staff account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // 优先使用环境变量中的密码
    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => {
            let password = generate_initial_password();
            warn!("==========================================================");
            warn!("  ADMIN_PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", password);
            warn!("  Please save this password or set ADMIN_PASSWORD env var");
            warn!("==========================================================");
            password
        }
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        username: ADMIN_USERNAME.to_string(),
        password,
        email: ADMIN_EMAIL.to_string(),
        full_name: "Administrator".to_string(),
        gender: true,
        dob: chrono::NaiveDate::default(),
        phone: String::new(),
        address: String::new(),
        bio: String::new(),
        avatar: None,
    };

    match storage
        .create_user(admin_request, password_hash, UserRole::Staff)
        .await
    {
        Ok(user) => {
            info!(
                "Default staff account created (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    let cache = create_object_cache();
    warn!("Moka cache backend initialized");

    StartupContext { storage, cache }
}
