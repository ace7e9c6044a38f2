use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::ProtectedResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 受保护路由探测，供前端确认会话与角色
pub async fn handle_protected(request: &HttpRequest, admin: bool) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let message = if admin {
        format!("Welcome to the admin area, {}", user.name)
    } else {
        format!("Hello {}, you have access to this protected route", user.name)
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ProtectedResponse { message, user },
        "Access granted",
    )))
}
