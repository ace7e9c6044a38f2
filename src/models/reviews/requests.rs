use super::entities::ReviewStatus;
use crate::models::common::{PaginationQuery, SortOrder, pagination::deserialize_optional_string_to_i64};
use crate::models::users::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

string_enum! {
    // 评价列表排序字段
    #[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
    pub enum ReviewSortField {
        ReviewerName => "reviewerName",
        Rating => "rating",
        Date => "date",
        Status => "status",
    }
}

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<ReviewStatus>,
    #[serde(default, deserialize_with = "deserialize_optional_string_to_i64")]
    #[ts(type = "number | null")]
    pub rating: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
    pub sort_by: Option<ReviewSortField>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct CreateReviewRequest {
    pub reviewer_name: String,
    pub role: UserRole,
    pub rating: i32,
    pub review_text: String,
    pub course_title: String,
    /// 缺省为当前时间
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<ReviewStatus>,
    pub avatar: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct UpdateReviewRequest {
    pub reviewer_name: Option<String>,
    pub role: Option<UserRole>,
    pub rating: Option<i32>,
    pub review_text: Option<String>,
    pub course_title: Option<String>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<ReviewStatus>,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct UpdateReviewStatusRequest {
    pub status: ReviewStatus,
}

#[derive(Debug, Clone)]
pub struct ReviewListQuery {
    pub page: u64,
    pub size: u64,
    pub status: Option<ReviewStatus>,
    pub rating: Option<i32>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
    pub sort_by: ReviewSortField,
    pub order: SortOrder,
}

impl From<ReviewListParams> for ReviewListQuery {
    fn from(params: ReviewListParams) -> Self {
        Self {
            page: params.pagination.page(),
            size: params.pagination.size(),
            status: params.status,
            rating: params.rating.and_then(|r| i32::try_from(r).ok()),
            role: params.role,
            search: params.search,
            sort_by: params.sort_by.unwrap_or(ReviewSortField::Date),
            order: params.order.unwrap_or_default(),
        }
    }
}
