use super::SeaOrmStorage;
use crate::entity::user_settings::{ActiveModel, Column, Entity as UserSettings};
use crate::errors::{Result, TutorHubError};
use crate::models::settings::entities::StoredSettings;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

impl SeaOrmStorage {
    /// 获取用户设置
    pub async fn get_user_settings_impl(&self, user_id: i64) -> Result<Option<StoredSettings>> {
        let result = UserSettings::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询用户设置失败: {e}")))?;

        Ok(result.map(|m| m.into_stored_settings()))
    }

    /// 写入用户设置（不存在则插入，存在则整行覆盖）
    pub async fn upsert_user_settings_impl(
        &self,
        user_id: i64,
        settings: StoredSettings,
    ) -> Result<StoredSettings> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            profile: Set(serde_json::to_string(&settings.profile)?),
            preferences: Set(serde_json::to_string(&settings.preferences)?),
            notifications: Set(serde_json::to_string(&settings.notifications)?),
            updated_at: Set(now),
        };

        UserSettings::insert(model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Profile,
                        Column::Preferences,
                        Column::Notifications,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "保存用户设置失败"))?;

        Ok(StoredSettings {
            updated_at: Some(crate::entity::ts_to_datetime(now)),
            ..settings
        })
    }
}
