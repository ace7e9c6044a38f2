//! 预导入模块，方便使用

pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::reviews::{ActiveModel as ReviewActiveModel, Entity as Reviews, Model as ReviewModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::user_settings::{
    ActiveModel as UserSettingsActiveModel, Entity as UserSettings, Model as UserSettingsModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
