use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::User, requests::CreateUserRequest, responses::UserResponse},
};
use crate::storage::Storage;
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::{
    normalize_email, validate_email, validate_name, validate_password_simple,
};

pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_account(&storage, user_data).await {
        Ok(user) => {
            info!("User {} created with role {}", user.id, user.role);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "User created successfully")))
        }
        Err(response) => Ok(response),
    }
}

/// 校验、哈希密码并写入新账户
///
/// 注册、管理员注册与后台创建用户共用此流程。失败时直接给出响应。
pub(crate) async fn create_account(
    storage: &Arc<dyn Storage>,
    mut user_data: CreateUserRequest,
) -> Result<User, HttpResponse> {
    // 验证姓名
    if let Err(msg) = validate_name(&user_data.name) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    user_data.name = user_data.name.trim().to_string();

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    user_data.email = normalize_email(&user_data.email);

    // 验证密码策略
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    // 检查邮箱是否已存在
    match storage.get_user_by_email(&user_data.email).await {
        Ok(Some(_)) => {
            return Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check email uniqueness: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    format!("User creation failed: {e}"),
                )),
            );
        }
    }

    user_data.password = match hash_password_blocking(user_data.password).await {
        Ok(hash) => hash,
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    storage.create_user(user_data).await.map_err(|e| {
        // 并发注册时由唯一约束兜底
        if e.is_conflict() {
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already exists",
            ))
        } else {
            error!("User creation failed: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("User creation failed: {e}"),
            ))
        }
    })
}
