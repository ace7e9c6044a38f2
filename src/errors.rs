//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 这些错误只在存储层与启动流程之间流转，HTTP 层统一转换为 `ApiResponse`。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tutorhub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TutorHubError {
            $($variant(String),)*
        }

        impl TutorHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TutorHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TutorHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TutorHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TutorHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TutorHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tutorhub_errors! {
    CacheBackendNotFound("E002", "Cache Backend Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Unique Constraint Conflict"),
    DateParse("E011", "Date Parse Error"),
}

impl TutorHubError {
    /// 将数据库错误归类：唯一约束冲突单独成为 Conflict
    pub fn from_db_err(err: sea_orm::DbErr, context: &str) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                TutorHubError::Conflict(format!("{context}: {detail}"))
            }
            _ => TutorHubError::DatabaseOperation(format!("{context}: {err}")),
        }
    }

    /// 是否为唯一约束冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, TutorHubError::Conflict(_))
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TutorHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TutorHubError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TutorHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        TutorHubError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TutorHubError {
    fn from(err: std::io::Error) -> Self {
        TutorHubError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TutorHubError {
    fn from(err: serde_json::Error) -> Self {
        TutorHubError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TutorHubError {
    fn from(err: chrono::ParseError) -> Self {
        TutorHubError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TutorHubError>;
