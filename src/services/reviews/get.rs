use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::reviews::responses::ReviewResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReviewResponse { review },
            "Review retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get review: {e}"),
            )),
        ),
    }
}
