//! 用户设置实体（各分区以 JSON 文本存储）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(column_type = "Text")]
    pub profile: String,
    #[sea_orm(column_type = "Text")]
    pub preferences: String,
    #[sea_orm(column_type = "Text")]
    pub notifications: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 解析存储的 JSON；损坏的分区退回默认值
    pub fn into_stored_settings(self) -> crate::models::settings::entities::StoredSettings {
        use crate::models::settings::entities::StoredSettings;

        StoredSettings {
            profile: serde_json::from_str(&self.profile).unwrap_or_default(),
            preferences: serde_json::from_str(&self.preferences).unwrap_or_default(),
            notifications: serde_json::from_str(&self.notifications).unwrap_or_default(),
            updated_at: Some(super::ts_to_datetime(self.updated_at)),
        }
    }
}
