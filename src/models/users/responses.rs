use super::entities::User;
use crate::models::common::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

// 用户响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserResponse {
    pub user: User,
}

// 用户列表响应
pub type UserListResponse = PaginatedResponse<User>;

// 按角色统计
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserRoleCounts {
    pub student: i64,
    pub tutor: i64,
    pub admin: i64,
}

// 按状态统计
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserStatusCounts {
    pub active: i64,
    pub trial: i64,
    pub inactive: i64,
}

// 用户概览卡片数据
#[derive(Debug, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserStatsResponse {
    pub total: i64,
    pub by_role: UserRoleCounts,
    pub by_status: UserStatusCounts,
}
