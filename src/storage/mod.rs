use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseListResponse, CourseStatsResponse},
    },
    reviews::{
        entities::Review,
        requests::{CreateReviewRequest, ReviewListQuery, UpdateReviewRequest},
        responses::{ReviewListResponse, ReviewStatsResponse},
    },
    settings::entities::StoredSettings,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::{StudentListResponse, StudentStatsResponse},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::{UserListResponse, UserStatsResponse},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须为已哈希的值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 用户概览统计
    async fn get_user_stats(&self) -> Result<UserStatsResponse>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn get_student_stats(&self) -> Result<StudentStatsResponse>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    async fn get_course_stats(&self) -> Result<CourseStatsResponse>;

    /// 评价管理方法
    async fn create_review(&self, review: CreateReviewRequest) -> Result<Review>;
    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>>;
    async fn list_reviews_with_pagination(
        &self,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse>;
    async fn update_review(&self, id: i64, update: UpdateReviewRequest)
    -> Result<Option<Review>>;
    async fn delete_review(&self, id: i64) -> Result<bool>;
    async fn get_review_stats(&self) -> Result<ReviewStatsResponse>;

    /// 用户设置方法
    // 获取已保存的设置（从未保存过时为 None）
    async fn get_user_settings(&self, user_id: i64) -> Result<Option<StoredSettings>>;
    // 写入设置（整行替换）
    async fn upsert_user_settings(
        &self,
        user_id: i64,
        settings: StoredSettings,
    ) -> Result<StoredSettings>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 使用指定数据库 URL 创建存储（不读取全局配置中的 database.url）
pub async fn create_storage_with_url(url: &str) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_with_url(url).await?;
    Ok(Arc::new(storage))
}
