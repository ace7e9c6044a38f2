use serde::{Deserialize, Serialize};
use ts_rs::TS;

string_enum! {
    // 学生状态
    #[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
    pub enum StudentStatus {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
        Graduated => "Graduated",
    }
}

impl StudentStatus {
    /// 状态切换：Active 停用，其余一律激活
    pub fn toggled(self) -> Self {
        match self {
            StudentStatus::Active => StudentStatus::Inactive,
            _ => StudentStatus::Active,
        }
    }
}

string_enum! {
    // 性别
    #[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
    pub enum Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// 班级
    #[serde(rename = "class")]
    pub class_name: String,
    pub gender: Gender,
    pub age: i32,
    pub status: StudentStatus,
    pub profile_image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
