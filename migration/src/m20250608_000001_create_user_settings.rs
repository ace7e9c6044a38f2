use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_tables::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 用户设置表 ====================
        // 每个用户一行，各分区以 JSON 文本存储
        manager
            .create_table(
                Table::create()
                    .table(UserSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserSettings::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserSettings::Profile).text().not_null())
                    .col(ColumnDef::new(UserSettings::Preferences).text().not_null())
                    .col(ColumnDef::new(UserSettings::Notifications).text().not_null())
                    .col(
                        ColumnDef::new(UserSettings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserSettings::Table, UserSettings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserSettings {
    #[sea_orm(iden = "user_settings")]
    Table,
    UserId,
    Profile,
    Preferences,
    Notifications,
    UpdatedAt,
}
