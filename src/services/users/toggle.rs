use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};

/// Active 与 Inactive 之间切换，Trial 视为未激活
pub async fn toggle_user_status(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CanNotChangeOwnStatus,
            "Cannot change the status of your own account",
        )));
    }

    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get user information: {e}"),
                )),
            );
        }
    };

    let next_status = user.status.toggled();
    let update = UpdateUserRequest {
        status: Some(next_status),
        ..Default::default()
    };

    let result = storage.update_user(user_id, update).await;
    service.invalidate_cached_user(user_id, request).await;

    match result {
        Ok(Some(user)) => {
            info!("User {} status changed to {}", user_id, next_status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                format!("User status changed to {next_status}"),
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("Failed to toggle user {} status: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    format!("Failed to update user status: {e}"),
                )),
            )
        }
    }
}
