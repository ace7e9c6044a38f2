use super::entities::Student;
use crate::models::common::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentResponse {
    pub student: Student,
}

pub type StudentListResponse = PaginatedResponse<Student>;

// 学生概览卡片数据
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentStatsResponse {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub pending: i64,
    pub graduated: i64,
}
