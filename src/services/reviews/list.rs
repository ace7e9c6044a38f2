use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReviewService;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::requests::{ReviewListParams, ReviewListQuery},
};

pub async fn list_reviews(
    service: &ReviewService,
    query: ReviewListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_reviews_with_pagination(ReviewListQuery::from(query))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Review list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to retrieve review list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve review list: {e}"),
                )),
            )
        }
    }
}
