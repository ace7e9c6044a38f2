use serde::{Deserialize, Serialize};
use ts_rs::TS;

string_enum! {
    // 课程状态
    #[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
    pub enum CourseStatus {
        Published => "Published",
        Draft => "Draft",
        Archived => "Archived",
    }
}

impl CourseStatus {
    /// 状态切换：Published 转为 Draft，其余一律发布
    pub fn toggled(self) -> Self {
        match self {
            CourseStatus::Published => CourseStatus::Draft,
            _ => CourseStatus::Published,
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub tutor_name: String,
    pub price: f64,
    pub status: CourseStatus,
    pub thumbnail_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggle() {
        assert_eq!(CourseStatus::Published.toggled(), CourseStatus::Draft);
        assert_eq!(CourseStatus::Draft.toggled(), CourseStatus::Published);
        assert_eq!(CourseStatus::Archived.toggled(), CourseStatus::Published);
    }
}
