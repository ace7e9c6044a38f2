use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReviewService;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{requests::CreateReviewRequest, responses::ReviewResponse},
};
use crate::utils::validate::{validate_name, validate_rating, validate_text};

pub(super) fn invalid(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ReviewValidationFailed,
        msg,
    ))
}

pub(super) fn validate_review_text(text: &str) -> Result<(), String> {
    validate_text(text, "Review text", 1, 5000)
}

pub(super) fn validate_course_title(title: &str) -> Result<(), String> {
    validate_text(title, "Course title", 1, 200)
}

pub async fn create_review(
    service: &ReviewService,
    mut review_data: CreateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&review_data.reviewer_name) {
        return Ok(invalid(format!("Reviewer {}", msg.to_lowercase())));
    }
    if let Err(msg) = validate_rating(review_data.rating) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_review_text(&review_data.review_text) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_course_title(&review_data.course_title) {
        return Ok(invalid(msg));
    }

    review_data.reviewer_name = review_data.reviewer_name.trim().to_string();
    review_data.review_text = review_data.review_text.trim().to_string();
    review_data.course_title = review_data.course_title.trim().to_string();

    let storage = service.get_storage(request);

    match storage.create_review(review_data).await {
        Ok(review) => {
            info!("Review {} created", review.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ReviewResponse { review },
                "Review created successfully",
            )))
        }
        Err(e) => {
            error!("Review creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReviewCreationFailed,
                    format!("Review creation failed: {e}"),
                )),
            )
        }
    }
}
