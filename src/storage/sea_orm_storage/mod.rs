//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod query;
mod reviews;
mod settings;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TutorHubError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url).await
    }

    /// 使用指定 URL 创建存储实例并运行迁移
    pub async fn new_with_url(url: &str) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TutorHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存数据库每个连接都是独立的库，只能保留唯一且常驻的连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.database.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| TutorHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TutorHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" || url == "sqlite::memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TutorHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, :memory: 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn get_user_stats(&self) -> Result<UserStatsResponse> {
        self.get_user_stats_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn get_student_stats(&self) -> Result<StudentStatsResponse> {
        self.get_student_stats_impl().await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn get_course_stats(&self) -> Result<CourseStatsResponse> {
        self.get_course_stats_impl().await
    }

    // 评价模块
    async fn create_review(&self, review: CreateReviewRequest) -> Result<Review> {
        self.create_review_impl(review).await
    }

    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>> {
        self.get_review_by_id_impl(id).await
    }

    async fn list_reviews_with_pagination(
        &self,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse> {
        self.list_reviews_with_pagination_impl(query).await
    }

    async fn update_review(
        &self,
        id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        self.update_review_impl(id, update).await
    }

    async fn delete_review(&self, id: i64) -> Result<bool> {
        self.delete_review_impl(id).await
    }

    async fn get_review_stats(&self) -> Result<ReviewStatsResponse> {
        self.get_review_stats_impl().await
    }

    // 设置模块
    async fn get_user_settings(&self, user_id: i64) -> Result<Option<StoredSettings>> {
        self.get_user_settings_impl(user_id).await
    }

    async fn upsert_user_settings(
        &self,
        user_id: i64,
        settings: StoredSettings,
    ) -> Result<StoredSettings> {
        self.upsert_user_settings_impl(user_id, settings).await
    }
}
