use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::auth::responses::{
    RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

fn expired_session() -> HttpResponse {
    let [access_cookie, refresh_cookie] = JwtUtils::create_empty_cookies();
    HttpResponse::Unauthorized()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Login expired or invalid, please login again",
        ))
}

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 从 cookie 中提取 refresh token
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            info!("Refresh token rejected: {}", e);
            return Ok(expired_session());
        }
    };

    let Ok(user_id) = claims.sub.parse::<i64>() else {
        return Ok(expired_session());
    };

    // 用户被删除或停用后不再签发新令牌
    let storage = service.get_storage(request);
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status.can_login() => user,
        Ok(_) => return Ok(expired_session()),
        Err(e) => {
            error!("Failed to load user {} during refresh: {}", user_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Token refresh failed",
                )),
            );
        }
    };

    match user.generate_access_token() {
        Ok(access_token) => {
            let cookie = JwtUtils::create_access_token_cookie(&access_token);
            let response = RefreshTokenResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            };
            Ok(HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::success(response, "Token refreshed successfully")))
        }
        Err(e) => {
            error!("Refresh token failed: {}", e);
            Ok(expired_session())
        }
    }
}

pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse { is_valid: true },
        "Token is valid",
    )))
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
