use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use crate::cache::{ObjectCache, user_cache_key};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password_blocking;
use crate::utils::validate::normalize_email;

use super::AuthService;

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Email or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    admin_only: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let email = normalize_email(&login_request.email);

    // 1. 根据邮箱获取用户信息
    let user = match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!("Login failed: unknown email {}", email);
            return Ok(invalid_credentials());
        }
        Err(e) => {
            error!("Login failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 验证密码
    if !verify_password_blocking(login_request.password, user.password_hash.clone()).await {
        info!("Login failed: wrong password for user {}", user.id);
        return Ok(invalid_credentials());
    }

    // 3. 校验账户状态与角色
    if !user.status.can_login() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccountInactive,
            "Account is inactive",
        )));
    }
    if admin_only && !user.is_admin() {
        info!("Admin login rejected for non-admin user {}", user.id);
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Administrator account required",
        )));
    }

    // 4. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        error!("Failed to update last login for user {}: {}", user.id, e);
    }
    if let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>() {
        cache.remove(&user_cache_key(user.id)).await;
    }

    // 5. 生成令牌对
    let refresh_expiry = JwtUtils::refresh_expiry(login_request.remember_me);
    let token_pair = match user.generate_token_pair(Some(refresh_expiry)) {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    info!("User {} logged in successfully", user.id);

    let access_cookie = JwtUtils::create_access_token_cookie(&token_pair.access_token);
    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_expiry);

    let user = match storage.get_user_by_id(user.id).await {
        Ok(Some(fresh)) => fresh,
        _ => user,
    };

    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
        user,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
