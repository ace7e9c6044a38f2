use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use super::create::invalid;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::UpdateCourseRequest, responses::CourseResponse},
};
use crate::utils::validate::{validate_name, validate_price, validate_text};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref title) = update_data.title {
        if let Err(msg) = validate_text(title, "Title", 1, 200) {
            return Ok(invalid(msg));
        }
        update_data.title = Some(title.trim().to_string());
    }
    if let Some(ref category) = update_data.category {
        if let Err(msg) = validate_text(category, "Category", 1, 100) {
            return Ok(invalid(msg));
        }
        update_data.category = Some(category.trim().to_string());
    }
    if let Some(ref tutor_name) = update_data.tutor_name {
        if let Err(msg) = validate_name(tutor_name) {
            return Ok(invalid(format!("Tutor {}", msg.to_lowercase())));
        }
        update_data.tutor_name = Some(tutor_name.trim().to_string());
    }
    if let Some(price) = update_data.price
        && let Err(msg) = validate_price(price)
    {
        return Ok(invalid(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse { course },
            "Course updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to update course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseUpdateFailed,
                    format!("Failed to update course: {e}"),
                )),
            )
        }
    }
}
