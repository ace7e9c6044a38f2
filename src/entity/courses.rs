//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: String,
    pub tutor_name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub status: String,
    pub thumbnail_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use super::ts_to_datetime;
        use crate::models::courses::entities::{Course, CourseStatus};

        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            tutor_name: self.tutor_name,
            price: self.price,
            status: self
                .status
                .parse::<CourseStatus>()
                .unwrap_or(CourseStatus::Draft),
            thumbnail_url: self.thumbnail_url,
            created_at: ts_to_datetime(self.created_at),
            updated_at: ts_to_datetime(self.updated_at),
        }
    }
}
