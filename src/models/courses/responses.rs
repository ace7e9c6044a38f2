use super::entities::Course;
use crate::models::common::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub course: Course,
}

pub type CourseListResponse = PaginatedResponse<Course>;

#[derive(Debug, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseStatsResponse {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
    pub archived: i64,
    /// 平均价格（无课程时为 0）
    pub average_price: f64,
}
