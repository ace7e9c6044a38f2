pub mod auth;

pub mod users;

pub mod students;

pub mod courses;

pub mod reviews;

pub mod settings;

pub mod system;

use actix_web::web;
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::config::AppConfig;
use crate::models::AppStartTime;
use crate::storage::Storage;
use crate::utils::{json_error_handler, query_error_handler};

pub use auth::{configure_auth_routes, configure_protected_routes};
pub use courses::configure_course_routes;
pub use reviews::configure_review_routes;
pub use settings::configure_settings_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

/// 注册共享状态、参数错误处理器与全部路由
///
/// 服务器入口与集成测试共用。
pub fn configure_app(
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    app_start_time: AppStartTime,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let max_payload_size = AppConfig::get().server.limits.max_payload_size;

        cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler)) // 设置查询参数错误处理器
            .app_data(
                web::JsonConfig::default()
                    .limit(max_payload_size)
                    .error_handler(json_error_handler),
            ) // 设置JSON错误处理器
            .app_data(web::PayloadConfig::new(max_payload_size)) // 设置最大请求体大小
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(cache))
            .app_data(web::Data::new(app_start_time))
            .configure(configure_auth_routes) // 配置认证相关路由
            .configure(configure_protected_routes)
            .configure(configure_user_routes) // 配置用户相关路由
            .configure(configure_student_routes)
            .configure(configure_course_routes)
            .configure(configure_review_routes)
            .configure(configure_settings_routes)
            .configure(configure_system_routes); // 健康检查与静态文件
    }
}
