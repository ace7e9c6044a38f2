use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::RegisterRequest,
    users::{entities::UserRole, requests::CreateUserRequest, responses::UserResponse},
};
use crate::services::users::create::create_account;

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let role = register_request.role.unwrap_or(UserRole::Student);

    // 自助注册不允许创建管理员
    if !UserRole::self_register_roles().contains(&&role) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RegisterFailed,
            "Registration is only open to students and tutors",
        )));
    }

    let storage = service.get_storage(request);

    let create_request = CreateUserRequest {
        name: register_request.name,
        email: register_request.email,
        password: register_request.password,
        role,
        status: None,
        avatar_url: None,
    };

    match create_account(&storage, create_request).await {
        Ok(user) => {
            info!("New {} registered: {}", user.role, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "Registration successful")))
        }
        Err(response) => Ok(response),
    }
}
