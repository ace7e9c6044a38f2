use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReviewService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_review(review_id).await {
        Ok(true) => {
            info!("Review {} deleted", review_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Review deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => {
            error!("Review deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReviewDeleteFailed,
                    format!("Review deletion failed: {e}"),
                )),
            )
        }
    }
}
