use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse { course },
            "Course retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get course: {e}"),
            )),
        ),
    }
}
