pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::settings::{
    entities::{SecurityInfo, StoredSettings, UserSettings},
    requests::UpdateSettingsRequest,
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct SettingsService {
    storage: Option<Arc<dyn Storage>>,
}

impl SettingsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取当前用户设置
    pub async fn get_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_settings(self, request).await
    }

    // 更新当前用户设置
    pub async fn update_settings(
        &self,
        update: UpdateSettingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_settings(self, update, request).await
    }
}

/// 合并已保存的设置与用户记录，得到对外展示的完整设置
pub(crate) fn compose_settings(user: &User, stored: Option<StoredSettings>) -> UserSettings {
    let mut stored = stored.unwrap_or_default();
    if stored.profile.display_name.trim().is_empty() {
        stored.profile.display_name = user.name.clone();
    }

    UserSettings {
        profile: stored.profile,
        preferences: stored.preferences,
        notifications: stored.notifications,
        security: SecurityInfo {
            last_login: user.last_login,
            two_factor_enabled: false,
        },
        updated_at: stored.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::entities::Theme;
    use crate::models::users::entities::{UserRole, UserStatus};

    fn sample_user() -> User {
        let now = chrono::Utc::now();
        User {
            id: 1,
            name: "Ada Admin".into(),
            email: "ada@example.com".into(),
            password_hash: String::new(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            avatar_url: None,
            last_login: Some(now),
            joined_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_defaults_use_user_name() {
        let user = sample_user();
        let settings = compose_settings(&user, None);
        assert_eq!(settings.profile.display_name, "Ada Admin");
        assert_eq!(settings.preferences.theme, Theme::System);
        assert_eq!(settings.preferences.items_per_page, 10);
        assert!(settings.notifications.email);
        assert!(!settings.security.two_factor_enabled);
        assert_eq!(settings.security.last_login, user.last_login);
        assert!(settings.updated_at.is_none());
    }

    #[test]
    fn test_stored_display_name_kept() {
        let user = sample_user();
        let mut stored = StoredSettings::default();
        stored.profile.display_name = "Ada".into();
        let settings = compose_settings(&user, Some(stored));
        assert_eq!(settings.profile.display_name, "Ada");
    }
}
