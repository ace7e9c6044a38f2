use super::entities::{Gender, StudentStatus};
use crate::models::common::{PaginationQuery, SortOrder};
use serde::Deserialize;
use ts_rs::TS;

string_enum! {
    // 学生列表排序字段
    #[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
    pub enum StudentSortField {
        Name => "name",
        Email => "email",
        Class => "class",
        Age => "age",
        Status => "status",
        CreatedAt => "createdAt",
    }
}

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<StudentStatus>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub gender: Option<Gender>,
    pub search: Option<String>,
    pub sort_by: Option<StudentSortField>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "class")]
    pub class_name: String,
    pub gender: Gender,
    pub age: i32,
    pub status: Option<StudentStatus>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub status: Option<StudentStatus>,
    pub profile_image: Option<String>,
}

// 显式设置状态
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentStatusRequest {
    pub status: StudentStatus,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: u64,
    pub size: u64,
    pub status: Option<StudentStatus>,
    pub class_name: Option<String>,
    pub gender: Option<Gender>,
    pub search: Option<String>,
    pub sort_by: StudentSortField,
    pub order: SortOrder,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: params.pagination.page(),
            size: params.pagination.size(),
            status: params.status,
            class_name: params.class_name.filter(|c| !c.trim().is_empty()),
            gender: params.gender,
            search: params.search,
            sort_by: params.sort_by.unwrap_or(StudentSortField::CreatedAt),
            order: params.order.unwrap_or_default(),
        }
    }
}
