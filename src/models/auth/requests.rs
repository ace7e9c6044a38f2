use crate::models::users::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 用户注册请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// 仅允许 Student / Tutor，缺省为 Student
    pub role: Option<UserRole>,
}

// 管理员注册请求（角色固定为 Admin）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct AdminRegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
