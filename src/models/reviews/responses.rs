use super::entities::Review;
use crate::models::common::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewResponse {
    pub review: Review,
}

pub type ReviewListResponse = PaginatedResponse<Review>;

// 各星级评价数量
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct RatingDistribution {
    #[serde(rename = "1")]
    pub one: i64,
    #[serde(rename = "2")]
    pub two: i64,
    #[serde(rename = "3")]
    pub three: i64,
    #[serde(rename = "4")]
    pub four: i64,
    #[serde(rename = "5")]
    pub five: i64,
}

impl RatingDistribution {
    pub fn add(&mut self, rating: i32, count: i64) {
        match rating {
            1 => self.one += count,
            2 => self.two += count,
            3 => self.three += count,
            4 => self.four += count,
            5 => self.five += count,
            _ => {}
        }
    }
}

#[derive(Debug, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewStatsResponse {
    pub total: i64,
    /// 平均评分（无评价时为 0）
    pub average_rating: f64,
    pub published: i64,
    pub pending: i64,
    pub flagged: i64,
    pub rating_distribution: RatingDistribution,
}
