//! 评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub reviewer_name: String,
    pub role: String,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub review_text: String,
    pub course_title: String,
    pub date: i64,
    pub status: String,
    pub avatar: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_review(self) -> crate::models::reviews::entities::Review {
        use super::ts_to_datetime;
        use crate::models::reviews::entities::{Review, ReviewStatus};
        use crate::models::users::entities::UserRole;

        Review {
            id: self.id,
            reviewer_name: self.reviewer_name,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            rating: self.rating,
            review_text: self.review_text,
            course_title: self.course_title,
            date: ts_to_datetime(self.date),
            status: self
                .status
                .parse::<ReviewStatus>()
                .unwrap_or(ReviewStatus::Pending),
            avatar: self.avatar,
            created_at: ts_to_datetime(self.created_at),
            updated_at: ts_to_datetime(self.updated_at),
        }
    }
}
