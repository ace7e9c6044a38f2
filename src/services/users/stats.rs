use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_user_stats(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "User statistics retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute user statistics: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute user statistics: {e}"),
                )),
            )
        }
    }
}
