use serde::{Deserialize, Serialize};
use ts_rs::TS;

string_enum! {
    // 用户角色
    #[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
    pub enum UserRole {
        Student => "Student", // 学生
        Tutor => "Tutor",     // 导师
        Admin => "Admin",     // 管理员
    }
}

impl UserRole {
    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Tutor, &Self::Admin]
    }
    pub fn self_register_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Tutor]
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Student
    }
}

string_enum! {
    // 用户状态
    #[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
    pub enum UserStatus {
        Active => "Active",     // 活跃
        Trial => "Trial",       // 试用
        Inactive => "Inactive", // 停用
    }
}

impl UserStatus {
    /// 状态切换：Active 停用，其余（Trial / Inactive）激活
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Trial | UserStatus::Inactive => UserStatus::Active,
        }
    }

    pub fn can_login(self) -> bool {
        self != UserStatus::Inactive
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub avatar_url: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub joined_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    // 生成访问令牌
    pub fn generate_access_token(&self) -> Result<String, String> {
        crate::utils::jwt::JwtUtils::generate_access_token(self.id, self.role.as_str())
            .map_err(|e| format!("生成 access token 失败: {e}"))
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            self.role.as_str(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("tutor".parse::<UserRole>().unwrap(), UserRole::Tutor);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("guardian".parse::<UserRole>().is_err());

        let role: UserRole = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Student\"");
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Trial.toggled(), UserStatus::Active);
        assert!(UserStatus::Trial.can_login());
        assert!(!UserStatus::Inactive.can_login());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let now = chrono::Utc::now();
        let user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "secret-hash".into(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            avatar_url: None,
            last_login: None,
            joined_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "Admin");
        assert!(json.get("joinedAt").is_some());
    }
}
