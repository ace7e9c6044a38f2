//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub class_name: String,
    pub gender: String,
    pub age: i32,
    pub status: String,
    pub profile_image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use super::ts_to_datetime;
        use crate::models::students::entities::{Gender, Student, StudentStatus};

        Student {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            class_name: self.class_name,
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Other),
            age: self.age,
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Pending),
            profile_image: self.profile_image,
            created_at: ts_to_datetime(self.created_at),
            updated_at: ts_to_datetime(self.updated_at),
        }
    }
}
