use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReviewService;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{entities::ReviewStatus, requests::UpdateReviewRequest, responses::ReviewResponse},
};

pub async fn set_review_status(
    service: &ReviewService,
    review_id: i64,
    status: ReviewStatus,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let update = UpdateReviewRequest {
        status: Some(status),
        ..Default::default()
    };

    match storage.update_review(review_id, update).await {
        Ok(Some(review)) => {
            info!("Review {} moderated to {}", review_id, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReviewResponse { review },
                format!("Review status changed to {status}"),
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => {
            error!("Failed to change review {} status: {}", review_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReviewUpdateFailed,
                    format!("Failed to update review status: {e}"),
                )),
            )
        }
    }
}
