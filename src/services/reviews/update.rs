use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReviewService;
use super::create::{invalid, validate_course_title, validate_review_text};
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{requests::UpdateReviewRequest, responses::ReviewResponse},
};
use crate::utils::validate::{validate_name, validate_rating};

pub async fn update_review(
    service: &ReviewService,
    review_id: i64,
    mut update_data: UpdateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.reviewer_name {
        if let Err(msg) = validate_name(name) {
            return Ok(invalid(format!("Reviewer {}", msg.to_lowercase())));
        }
        update_data.reviewer_name = Some(name.trim().to_string());
    }
    if let Some(rating) = update_data.rating
        && let Err(msg) = validate_rating(rating)
    {
        return Ok(invalid(msg));
    }
    if let Some(ref text) = update_data.review_text {
        if let Err(msg) = validate_review_text(text) {
            return Ok(invalid(msg));
        }
        update_data.review_text = Some(text.trim().to_string());
    }
    if let Some(ref title) = update_data.course_title {
        if let Err(msg) = validate_course_title(title) {
            return Ok(invalid(msg));
        }
        update_data.course_title = Some(title.trim().to_string());
    }

    let storage = service.get_storage(request);

    match storage.update_review(review_id, update_data).await {
        Ok(Some(review)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReviewResponse { review },
            "Review updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => {
            error!("Failed to update review {}: {}", review_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReviewUpdateFailed,
                    format!("Failed to update review: {e}"),
                )),
            )
        }
    }
}
