use super::entities::{NotificationSettings, PreferenceSettings, ProfileSettings};
use serde::Deserialize;
use ts_rs::TS;

// 设置更新请求：提供的分区整体替换，security 字段忽略
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct UpdateSettingsRequest {
    pub profile: Option<ProfileSettings>,
    pub preferences: Option<PreferenceSettings>,
    pub notifications: Option<NotificationSettings>,
}
