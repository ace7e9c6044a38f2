use super::entities::UserSettings;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct SettingsResponse {
    pub settings: UserSettings,
}
