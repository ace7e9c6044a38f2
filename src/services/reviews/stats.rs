use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReviewService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_review_stats(
    service: &ReviewService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_review_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Review statistics retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute review statistics: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute review statistics: {e}"),
                )),
            )
        }
    }
}
