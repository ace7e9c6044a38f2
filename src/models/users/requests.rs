use super::entities::{UserRole, UserStatus};
use crate::models::common::{PaginationQuery, SortOrder};
use serde::Deserialize;
use ts_rs::TS;

string_enum! {
    // 用户列表排序字段
    #[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
    pub enum UserSortField {
        Name => "name",
        Email => "email",
        Role => "role",
        Status => "status",
        JoinedAt => "joinedAt",
    }
}

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
    pub sort_by: Option<UserSortField>,
    pub order: Option<SortOrder>,
}

// 用户创建请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    pub status: Option<UserStatus>,
    pub avatar_url: Option<String>,
}

// 用户更新请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub avatar_url: Option<String>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: u64,
    pub size: u64,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
    pub sort_by: UserSortField,
    pub order: SortOrder,
}

impl From<UserListParams> for UserListQuery {
    fn from(params: UserListParams) -> Self {
        Self {
            page: params.pagination.page(),
            size: params.pagination.size(),
            role: params.role,
            status: params.status,
            search: params.search,
            sort_by: params.sort_by.unwrap_or(UserSortField::JoinedAt),
            order: params.order.unwrap_or_default(),
        }
    }
}
