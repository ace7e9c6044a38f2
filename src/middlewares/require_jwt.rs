/*!
 * JWT 认证中间件
 *
 * 此中间件用于验证 JWT 令牌的有效性，确保只有经过身份验证的用户才能访问受保护的路由。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * use actix_web::{web, App, HttpServer};
 * use crate::middlewares::require_jwt::RequireJWT;
 *
 * HttpServer::new(|| {
 *     App::new()
 *         .service(
 *             web::scope("/api")
 *                 .wrap(RequireJWT)  // 应用JWT验证中间件
 *                 .route("/protected", web::get().to(protected_handler))
 *         )
 * })
 * ```
 *
 * 2. 在处理程序中提取用户信息：
 * ```rust,ignore
 * use actix_web::{web, HttpRequest, HttpResponse, Result};
 * use crate::middlewares::require_jwt::RequireJWT;
 *
 * async fn protected_handler(req: HttpRequest) -> Result<HttpResponse> {
 *     // 提取当前用户
 *     if let Some(user) = RequireJWT::extract_user_claims(&req) {
 *         return Ok(HttpResponse::Ok().json(format!("Hello, {}! Role: {}", user.name, user.role)));
 *     }
 *
 *     // 或者只提取用户ID
 *     if let Some(user_id) = RequireJWT::extract_user_id(&req) {
 *         return Ok(HttpResponse::Ok().json(format!("User ID: {}", user_id)));
 *     }
 *
 *     Ok(HttpResponse::InternalServerError().finish())
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`，或携带 `access_token` cookie
 * 2. 中间件提取并验证JWT令牌，按 `user:{id}` 优先从缓存加载用户
 * 3. 如果令牌有效，将用户信息存储在请求扩展中，继续处理请求
 * 4. 如果令牌无效或缺失，返回401；账户已停用返回403
 *
 * ## 配置
 *
 * 确保在环境变量中设置了 `JWT_SECRET`，JWT服务将使用此密钥来验证令牌。
 */

use crate::cache::{CacheResult, ObjectCache, user_cache_key};
use crate::config::AppConfig;
use crate::models::{ErrorCode, users::entities};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireJWT;

// 认证失败原因
enum AuthError {
    Unauthorized(String),
    Inactive,
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<entities::User, AuthError> {
    let token = JwtUtils::extract_access_token(req).ok_or_else(|| {
        AuthError::Unauthorized("Missing or invalid Authorization header".to_string())
    })?;

    let claims = JwtUtils::verify_access_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AuthError::Unauthorized("Invalid JWT token".to_string())
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthError::Unauthorized("Invalid user ID in JWT".to_string()))?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    let cache_key = user_cache_key(user_id);

    // 从缓存中获取用户信息
    let cached = match cache.get_raw(&cache_key).await {
        CacheResult::Found(json) => match serde_json::from_str::<entities::User>(&json) {
            Ok(user) => Some(user),
            Err(_) => {
                cache.remove(&cache_key).await;
                info!("Failed to deserialize cached user {}", user_id);
                None
            }
        },
        CacheResult::NotFound => {
            debug!("User {} not found in cache", user_id);
            None
        }
    };

    let user = match cached {
        Some(user) => user,
        None => {
            let storage = req
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone();

            let user = storage
                .get_user_by_id(user_id)
                .await
                .map_err(|e| {
                    error!("Failed to retrieve user {} from storage: {}", user_id, e);
                    AuthError::Unauthorized("Failed to retrieve user from storage".to_string())
                })?
                .ok_or_else(|| AuthError::Unauthorized("User not found".to_string()))?;

            // 将用户信息存入缓存
            if let Ok(user_json) = serde_json::to_string(&user) {
                cache
                    .insert_raw(cache_key, user_json, AppConfig::get().cache.default_ttl)
                    .await;
            }
            user
        }
    };

    if !user.status.can_login() {
        return Err(AuthError::Inactive);
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(AuthError::Unauthorized(err)) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
                Err(AuthError::Inactive) => {
                    info!("Inactive account rejected for request to {}", req.path());
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::AccountInactive,
                            "Account is inactive",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    /// 从请求扩展中提取用户ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<entities::User>().map(|user| user.id)
    }
}
