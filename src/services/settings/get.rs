use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SettingsService, compose_settings};
use crate::middlewares::RequireJWT;
use crate::models::settings::responses::SettingsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_settings(
    service: &SettingsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_user_settings(user.id).await {
        Ok(stored) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SettingsResponse {
                settings: compose_settings(&user, stored),
            },
            "Settings retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to load settings for user {}: {}", user.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load settings: {e}"),
                )),
            )
        }
    }
}
