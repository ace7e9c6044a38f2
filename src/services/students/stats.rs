use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_student_stats(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Student statistics retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to compute student statistics: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute student statistics: {e}"),
                )),
            )
        }
    }
}
