use crate::cache::{ObjectCache, create_object_cache};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 默认管理员邮箱
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@localhost";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 生成随机密码（保证包含大小写字母、数字）
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    let body: String = (0..length.saturating_sub(3))
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!(
        "{}{}{}{body}",
        rng.random_range(b'A'..=b'Z') as char,
        rng.random_range(b'a'..=b'z') as char,
        rng.random_range(b'0'..=b'9') as char,
    )
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个默认的 admin 账号
pub async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| {
            let pwd = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", pwd);
            warn!("  Please save this password or set ADMIN_PASSWORD env var");
            warn!("==========================================================");
            pwd
        });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        name: "Administrator".to_string(),
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        password: password_hash,
        role: UserRole::Admin,
        status: None,
        avatar_url: None,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存与默认管理员
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    let cache = create_object_cache().expect("Failed to create cache");
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_meets_policy() {
        for _ in 0..20 {
            let pwd = generate_random_password(16);
            assert_eq!(pwd.chars().count(), 16);
            assert!(crate::utils::validate::validate_password_simple(&pwd).is_ok());
        }
    }
}
