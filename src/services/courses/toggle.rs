use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::UpdateCourseRequest, responses::CourseResponse},
};

pub async fn toggle_course_status(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    };

    let next_status = course.status.toggled();
    let update = UpdateCourseRequest {
        status: Some(next_status),
        ..Default::default()
    };

    match storage.update_course(course_id, update).await {
        Ok(Some(course)) => {
            info!("Course {} status changed to {}", course_id, next_status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseResponse { course },
                format!("Course status changed to {next_status}"),
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to toggle course {} status: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseUpdateFailed,
                    format!("Failed to update course status: {e}"),
                )),
            )
        }
    }
}
