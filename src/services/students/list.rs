use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListParams, StudentListQuery},
};

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_students_with_pagination(StudentListQuery::from(query))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Student list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to retrieve student list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student list: {e}"),
                )),
            )
        }
    }
}
