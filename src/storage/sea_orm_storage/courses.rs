use super::SeaOrmStorage;
use super::query::{count_of, folded, page_in_range, search_condition};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseStatus},
        requests::{CourseListQuery, CourseSortField, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseListResponse, CourseStatsResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            category: Set(req.category),
            tutor_name: Set(req.tutor_name),
            price: Set(req.price),
            status: Set(req.status.unwrap_or(CourseStatus::Draft).to_string()),
            thumbnail_url: Set(req.thumbnail_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "创建课程失败"))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let mut select = Courses::find();

        if let Some(condition) = search_condition(
            query.search.as_deref(),
            &[Column::Title, Column::TutorName, Column::Category],
        ) {
            select = select.filter(condition);
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category.trim()));
        }

        let sort_expr = match query.sort_by {
            CourseSortField::Title => folded(Column::Title),
            CourseSortField::Category => folded(Column::Category),
            CourseSortField::Price => Column::Price.into_expr(),
            CourseSortField::Status => Column::Status.into_expr(),
            CourseSortField::CreatedAt => Column::CreatedAt.into_expr(),
        };
        select = select
            .order_by(sort_expr, query.order.to_order())
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, query.size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询课程总数失败: {e}")))?;

        // 超出范围的页直接返回空列表
        let courses = if page_in_range(query.page, query.size, total) {
            paginator
                .fetch_page(query.page - 1)
                .await
                .map_err(|e| TutorHubError::database_operation(format!("查询课程列表失败: {e}")))?
        } else {
            Vec::new()
        };

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo::new(query.page, query.size, total),
        })
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        if self.get_course_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(category) = update.category {
            model.category = Set(category);
        }
        if let Some(tutor_name) = update.tutor_name {
            model.tutor_name = Set(tutor_name);
        }
        if let Some(price) = update.price {
            model.price = Set(price);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            model.thumbnail_url = Set(Some(thumbnail_url));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "更新课程失败"))?;

        Ok(Some(updated.into_course()))
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按状态分组统计，并计算平均价格
    pub async fn get_course_stats_impl(&self) -> Result<CourseStatsResponse> {
        let by_status = Courses::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计课程失败: {e}")))?;

        let price_sum = Courses::find()
            .select_only()
            .column_as(Column::Price.sum(), "price_sum")
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计课程价格失败: {e}")))?
            .flatten()
            .unwrap_or(0.0);

        let total: i64 = by_status.iter().map(|(_, count)| count).sum();
        let average_price = if total > 0 {
            price_sum / total as f64
        } else {
            0.0
        };

        Ok(CourseStatsResponse {
            total,
            published: count_of(&by_status, CourseStatus::Published.as_str()),
            draft: count_of(&by_status, CourseStatus::Draft.as_str()),
            archived: count_of(&by_status, CourseStatus::Archived.as_str()),
            average_price,
        })
    }
}
