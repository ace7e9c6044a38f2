use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course_stats(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Course statistics retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute course statistics: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute course statistics: {e}"),
                )),
            )
        }
    }
}
