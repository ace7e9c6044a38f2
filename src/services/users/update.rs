use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::{UserRole, UserStatus},
        requests::UpdateUserRequest,
        responses::UserResponse,
    },
};
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::{
    normalize_email, validate_email, validate_name, validate_password_simple,
};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name {
        if let Err(msg) = validate_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
        }
        update_data.name = Some(name.trim().to_string());
    }

    if let Some(ref email) = update_data.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }
        update_data.email = Some(normalize_email(email));
    }

    // 管理员不能通过编辑自己把自己降级或停用
    if RequireJWT::extract_user_id(request) == Some(user_id)
        && (update_data.role.is_some_and(|r| r != UserRole::Admin)
            || update_data.status == Some(UserStatus::Inactive))
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CanNotChangeOwnStatus,
            "Cannot change your own role or deactivate your own account",
        )));
    }

    if let Some(password) = update_data.password.take() {
        if let Err(msg) = validate_password_simple(&password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }
        match hash_password_blocking(password).await {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Password hashing failed: {e}"),
                    )),
                );
            }
        }
    }

    let result = storage.update_user(user_id, update_data).await;
    service.invalidate_cached_user(user_id, request).await;

    match result {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists",
        ))),
        Err(e) => {
            error!("Failed to update user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    format!("Failed to update user information: {e}"),
                )),
            )
        }
    }
}
