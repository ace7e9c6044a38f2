use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course {} deleted", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Course deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseDeleteFailed,
                    format!("Course deletion failed: {e}"),
                )),
            )
        }
    }
}
