use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
};
use crate::utils::validate::{validate_name, validate_price, validate_text};

pub(super) fn invalid(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::CourseValidationFailed,
        msg,
    ))
}

pub async fn create_course(
    service: &CourseService,
    mut course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_text(&course_data.title, "Title", 1, 200) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_text(&course_data.category, "Category", 1, 100) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_name(&course_data.tutor_name) {
        return Ok(invalid(format!("Tutor {}", msg.to_lowercase())));
    }
    if let Err(msg) = validate_price(course_data.price) {
        return Ok(invalid(msg));
    }

    course_data.title = course_data.title.trim().to_string();
    course_data.category = course_data.category.trim().to_string();
    course_data.tutor_name = course_data.tutor_name.trim().to_string();

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created", course.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CourseResponse { course },
                "Course created successfully",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}
