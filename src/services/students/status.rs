use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{
        entities::StudentStatus, requests::UpdateStudentRequest, responses::StudentResponse,
    },
};

pub async fn toggle_student_status(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => {
            set_student_status(service, student_id, student.status.toggled(), request).await
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {e}"),
            )),
        ),
    }
}

pub async fn set_student_status(
    service: &StudentService,
    student_id: i64,
    status: StudentStatus,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let update = UpdateStudentRequest {
        status: Some(status),
        ..Default::default()
    };

    match storage.update_student(student_id, update).await {
        Ok(Some(student)) => {
            info!("Student {} status changed to {}", student_id, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentResponse { student },
                format!("Student status changed to {status}"),
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to change student {} status: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentUpdateFailed,
                    format!("Failed to update student status: {e}"),
                )),
            )
        }
    }
}
