use crate::models::users::entities::UserRole;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

string_enum! {
    // 评价状态
    #[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
    pub enum ReviewStatus {
        Published => "Published",
        Pending => "Pending",
        Flagged => "Flagged",
    }
}

// 评价实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    pub id: i64,
    pub reviewer_name: String,
    /// 评价人身份
    pub role: UserRole,
    /// 1-5 星
    pub rating: i32,
    pub review_text: String,
    /// 自由文本，不关联课程表
    pub course_title: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub status: ReviewStatus,
    pub avatar: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
