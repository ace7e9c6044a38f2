//! 集成测试公共工具
//!
//! 每个测试使用独立的内存 SQLite 数据库与独立缓存。
#![allow(dead_code)]

use actix_web::http::header;
use std::sync::Arc;

use tutorhub::cache::ObjectCache;
use tutorhub::cache::object_cache::moka::MokaCacheWrapper;
use tutorhub::models::AppStartTime;
use tutorhub::models::users::entities::{User, UserRole, UserStatus};
use tutorhub::models::users::requests::CreateUserRequest;
use tutorhub::storage::{Storage, create_storage_with_url};
use tutorhub::utils::jwt::JwtUtils;
use tutorhub::utils::password::hash_password;

/// 测试账户的统一密码（满足密码策略）
pub const TEST_PASSWORD: &str = "SecurePass123";

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub start_time: AppStartTime,
}

pub async fn setup() -> TestContext {
    let storage = create_storage_with_url(":memory:")
        .await
        .expect("Failed to create in-memory storage");
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new());

    TestContext {
        storage,
        cache,
        start_time: AppStartTime {
            start_datetime: chrono::Utc::now(),
        },
    }
}

/// 使用完整路由配置初始化测试服务
#[macro_export]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(actix_web::App::new().configure(
            tutorhub::routes::configure_app(
                $ctx.storage.clone(),
                $ctx.cache.clone(),
                $ctx.start_time.clone(),
            ),
        ))
        .await
    };
}

/// 直接写库创建用户
pub async fn create_user(
    ctx: &TestContext,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
) -> User {
    let request = CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: hash_password(TEST_PASSWORD).expect("hash"),
        role,
        status: Some(status),
        avatar_url: None,
    };
    ctx.storage.create_user(request).await.expect("create user")
}

pub async fn create_admin(ctx: &TestContext) -> User {
    create_user(
        ctx,
        "Ada Admin",
        "ada@example.com",
        UserRole::Admin,
        UserStatus::Active,
    )
    .await
}

pub async fn create_tutor(ctx: &TestContext) -> User {
    create_user(
        ctx,
        "Tom Tutor",
        "tom@example.com",
        UserRole::Tutor,
        UserStatus::Active,
    )
    .await
}

pub async fn create_student_user(ctx: &TestContext) -> User {
    create_user(
        ctx,
        "Sam Student",
        "sam@example.com",
        UserRole::Student,
        UserStatus::Active,
    )
    .await
}

/// 为用户签发 Authorization 头
pub fn bearer(user: &User) -> (header::HeaderName, String) {
    let token = JwtUtils::generate_access_token(user.id, user.role.as_str()).expect("token");
    (header::AUTHORIZATION, format!("Bearer {token}"))
}
