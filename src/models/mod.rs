//! 数据模型定义
//!
//! 每个业务模块分为 `entities`（业务实体）、`requests`（请求 DTO）与
//! `responses`（响应 DTO）。所有结构都导出 TypeScript 定义供前端使用。

/// 定义以字符串存储/传输的枚举
///
/// 自动生成：
/// - enum 定义（Serialize 输出规范写法，TS 导出字面量联合类型）
/// - as_str() / ALL
/// - Display、FromStr（忽略大小写）
/// - Deserialize（忽略大小写，错误信息列出可选值）
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, ts_rs::TS)]
        $(#[$meta])*
        $vis enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Ok($name::$variant);
                    }
                )+
                Err(format!(
                    "Invalid {}: '{}'. Supported: {}",
                    stringify!($name),
                    s,
                    [$($text),+].join(", ")
                ))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod auth;
pub mod common;
pub mod courses;
pub mod reviews;
pub mod settings;
pub mod students;
pub mod system;
pub mod users;

pub use common::{
    ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery, SortOrder,
};

/// 程序启动时间（用于健康检查中的运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
