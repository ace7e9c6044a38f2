use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

/// 处理用户登出
/// 通过把两个令牌 cookie 置空（max_age=0）来清除客户端的登录状态
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    if let Some(user_id) = RequireJWT::extract_user_id(request) {
        tracing::info!("User {} logged out", user_id);
    }

    let [access_cookie, refresh_cookie] = JwtUtils::create_empty_cookies();

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::<()>::success_empty("Logout successful")))
}
