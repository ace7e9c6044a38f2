use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SettingsService, compose_settings};
use crate::middlewares::RequireJWT;
use crate::models::settings::{
    entities::ITEMS_PER_PAGE_RANGE, requests::UpdateSettingsRequest,
    responses::SettingsResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_phone;

const MAX_BIO_CHARS: usize = 500;

fn validate_update(update: &UpdateSettingsRequest) -> Result<(), String> {
    if let Some(profile) = &update.profile {
        if profile.bio.chars().count() > MAX_BIO_CHARS {
            return Err(format!("Bio must be at most {MAX_BIO_CHARS} characters"));
        }
        if profile.display_name.chars().count() > 100 {
            return Err("Display name must be at most 100 characters".into());
        }
        if !profile.phone.trim().is_empty() {
            validate_phone(&profile.phone)?;
        }
    }
    if let Some(preferences) = &update.preferences
        && !ITEMS_PER_PAGE_RANGE.contains(&preferences.items_per_page)
    {
        return Err(format!(
            "Items per page must be between {} and {}",
            ITEMS_PER_PAGE_RANGE.start(),
            ITEMS_PER_PAGE_RANGE.end()
        ));
    }
    Ok(())
}

pub async fn update_settings(
    service: &SettingsService,
    update: UpdateSettingsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    if let Err(msg) = validate_update(&update) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SettingsValidationFailed,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    let mut settings = match storage.get_user_settings(user.id).await {
        Ok(stored) => stored.unwrap_or_default(),
        Err(e) => {
            error!("Failed to load settings for user {}: {}", user.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SettingsUpdateFailed,
                    format!("Failed to update settings: {e}"),
                )),
            );
        }
    };

    // 提供的分区整体替换
    if let Some(profile) = update.profile {
        settings.profile = profile;
    }
    if let Some(preferences) = update.preferences {
        settings.preferences = preferences;
    }
    if let Some(notifications) = update.notifications {
        settings.notifications = notifications;
    }

    match storage.upsert_user_settings(user.id, settings).await {
        Ok(saved) => {
            info!("User {} updated settings", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SettingsResponse {
                    settings: compose_settings(&user, Some(saved)),
                },
                "Settings updated successfully",
            )))
        }
        Err(e) => {
            error!("Failed to save settings for user {}: {}", user.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SettingsUpdateFailed,
                    format!("Failed to update settings: {e}"),
                )),
            )
        }
    }
}
