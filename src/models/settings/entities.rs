use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 每页条数允许范围
pub const ITEMS_PER_PAGE_RANGE: std::ops::RangeInclusive<i32> = 5..=100;

string_enum! {
    // 界面主题
    #[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
    pub enum Theme {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

// 个人资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct ProfileSettings {
    pub display_name: String,
    pub bio: String,
    pub phone: String,
    pub timezone: String,
    pub language: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            bio: String::new(),
            phone: String::new(),
            timezone: "UTC".to_string(),
            language: "en".to_string(),
        }
    }
}

// 偏好设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct PreferenceSettings {
    pub theme: Theme,
    pub language: String,
    pub items_per_page: i32,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: "en".to_string(),
            items_per_page: 10,
        }
    }
}

// 通知设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            weekly_digest: true,
        }
    }
}

// 安全信息（只读，由用户记录推导）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct SecurityInfo {
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub two_factor_enabled: bool,
}

// 已持久化的用户设置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredSettings {
    pub profile: ProfileSettings,
    pub preferences: PreferenceSettings,
    pub notifications: NotificationSettings,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 用户设置
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct UserSettings {
    pub profile: ProfileSettings,
    pub preferences: PreferenceSettings,
    pub notifications: NotificationSettings,
    pub security: SecurityInfo,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_uses_defaults() {
        let prefs: PreferenceSettings = serde_json::from_str(r#"{"theme":"Dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.items_per_page, 10);
        assert_eq!(serde_json::to_value(prefs.theme).unwrap(), "dark");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(serde_json::from_str::<PreferenceSettings>(r#"{"theme":"neon"}"#).is_err());
    }
}
