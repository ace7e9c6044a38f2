use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use super::update::validate_optional_phone;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::utils::validate::{
    normalize_email, validate_age, validate_email, validate_name, validate_text,
};

fn invalid(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::StudentValidationFailed,
        msg,
    ))
}

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&student_data.name) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_text(&student_data.class_name, "Class", 1, 50) {
        return Ok(invalid(msg));
    }
    if let Err(msg) = validate_age(student_data.age) {
        return Ok(invalid(msg));
    }
    student_data.phone = match validate_optional_phone(student_data.phone.take()) {
        Ok(phone) => phone,
        Err(msg) => return Ok(invalid(msg)),
    };

    student_data.name = student_data.name.trim().to_string();
    student_data.email = normalize_email(&student_data.email);
    student_data.class_name = student_data.class_name.trim().to_string();

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created", student.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student created successfully",
            )))
        }
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentEmailAlreadyExists,
            "A student with this email already exists",
        ))),
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    format!("Student creation failed: {e}"),
                )),
            )
        }
    }
}
