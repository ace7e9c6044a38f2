use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    auth::AdminRegisterRequest,
    users::{entities::UserRole, requests::CreateUserRequest, responses::UserResponse},
};
use crate::services::users::create::create_account;

use super::AuthService;

/// 由现有管理员创建新的管理员账户
pub async fn handle_admin_register(
    service: &AuthService,
    register_request: AdminRegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let create_request = CreateUserRequest {
        name: register_request.name,
        email: register_request.email,
        password: register_request.password,
        role: UserRole::Admin,
        status: None,
        avatar_url: None,
    };

    match create_account(&storage, create_request).await {
        Ok(user) => {
            warn!(
                "Admin account {} created by user {:?}",
                user.id,
                RequireJWT::extract_user_id(request)
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "Administrator created successfully",
            )))
        }
        Err(response) => Ok(response),
    }
}
