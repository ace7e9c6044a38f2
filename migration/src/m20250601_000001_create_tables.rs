use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::ClassName).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::Age).integer().not_null())
                    .col(ColumnDef::new(Students::Status).string().not_null())
                    .col(ColumnDef::new(Students::ProfileImage).string().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Category).string().not_null())
                    .col(ColumnDef::new(Courses::TutorName).string().not_null())
                    .col(ColumnDef::new(Courses::Price).double().not_null())
                    .col(ColumnDef::new(Courses::Status).string().not_null())
                    .col(ColumnDef::new(Courses::ThumbnailUrl).string().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评价表
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::ReviewerName).string().not_null())
                    .col(ColumnDef::new(Reviews::Role).string().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::ReviewText).text().not_null())
                    .col(ColumnDef::new(Reviews::CourseTitle).string().not_null())
                    .col(ColumnDef::new(Reviews::Date).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::Status).string().not_null())
                    .col(ColumnDef::new(Reviews::Avatar).string().null())
                    .col(ColumnDef::new(Reviews::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_status")
                    .table(Users::Table)
                    .col(Users::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_status")
                    .table(Students::Table)
                    .col(Students::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_class_name")
                    .table(Students::Table)
                    .col(Students::ClassName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_status")
                    .table(Courses::Table)
                    .col(Courses::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_status")
                    .table(Reviews::Table)
                    .col(Reviews::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    Status,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Email,
    Phone,
    ClassName,
    Gender,
    Age,
    Status,
    ProfileImage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Title,
    Description,
    Category,
    TutorName,
    Price,
    Status,
    ThumbnailUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Reviews {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    ReviewerName,
    Role,
    Rating,
    ReviewText,
    CourseTitle,
    Date,
    Status,
    Avatar,
    CreatedAt,
    UpdatedAt,
}
