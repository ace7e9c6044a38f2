use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::UpdateStudentRequest, responses::StudentResponse},
};
use crate::utils::validate::{
    normalize_email, validate_age, validate_email, validate_name, validate_phone, validate_text,
};

/// 空白电话号码视为未填写
pub(super) fn validate_optional_phone(
    phone: Option<String>,
) -> Result<Option<String>, &'static str> {
    match phone.map(|p| p.trim().to_string()) {
        Some(p) if p.is_empty() => Ok(None),
        Some(p) => validate_phone(&p).map(|_| Some(p)),
        None => Ok(None),
    }
}

fn invalid(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::StudentValidationFailed,
        msg,
    ))
}

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.name {
        if let Err(msg) = validate_name(name) {
            return Ok(invalid(msg));
        }
        update_data.name = Some(name.trim().to_string());
    }
    if let Some(ref email) = update_data.email {
        if let Err(msg) = validate_email(email) {
            return Ok(invalid(msg));
        }
        update_data.email = Some(normalize_email(email));
    }
    if let Some(ref class_name) = update_data.class_name {
        if let Err(msg) = validate_text(class_name, "Class", 1, 50) {
            return Ok(invalid(msg));
        }
        update_data.class_name = Some(class_name.trim().to_string());
    }
    if let Some(age) = update_data.age
        && let Err(msg) = validate_age(age)
    {
        return Ok(invalid(msg));
    }
    if update_data.phone.is_some() {
        match validate_optional_phone(update_data.phone.take()) {
            // 空字符串不清空已有号码
            Ok(phone) => update_data.phone = phone,
            Err(msg) => return Ok(invalid(msg)),
        }
    }

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentEmailAlreadyExists,
            "A student with this email already exists",
        ))),
        Err(e) => {
            error!("Failed to update student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentUpdateFailed,
                    format!("Failed to update student: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_phone() {
        assert_eq!(validate_optional_phone(None), Ok(None));
        assert_eq!(validate_optional_phone(Some("   ".into())), Ok(None));
        assert_eq!(
            validate_optional_phone(Some(" +1 (555) 010-2030 ".into())),
            Ok(Some("+1 (555) 010-2030".into()))
        );
        assert!(validate_optional_phone(Some("call me".into())).is_err());
    }
}
