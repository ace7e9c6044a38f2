use super::entities::CourseStatus;
use crate::models::common::{PaginationQuery, SortOrder};
use serde::Deserialize;
use ts_rs::TS;

string_enum! {
    // 课程列表排序字段
    #[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
    pub enum CourseSortField {
        Title => "title",
        Category => "category",
        Price => "price",
        Status => "status",
        CreatedAt => "createdAt",
    }
}

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<CourseStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<CourseSortField>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub tutor_name: String,
    #[serde(default)]
    pub price: f64,
    pub status: Option<CourseStatus>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tutor_name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<CourseStatus>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: u64,
    pub size: u64,
    pub status: Option<CourseStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: CourseSortField,
    pub order: SortOrder,
}

impl From<CourseListParams> for CourseListQuery {
    fn from(params: CourseListParams) -> Self {
        Self {
            page: params.pagination.page(),
            size: params.pagination.size(),
            status: params.status,
            category: params.category.filter(|c| !c.trim().is_empty()),
            search: params.search,
            sort_by: params.sort_by.unwrap_or(CourseSortField::CreatedAt),
            order: params.order.unwrap_or_default(),
        }
    }
}
