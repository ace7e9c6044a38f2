use super::SeaOrmStorage;
use super::query::{count_of, folded, page_in_range, search_condition};
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    reviews::{
        entities::{Review, ReviewStatus},
        requests::{CreateReviewRequest, ReviewListQuery, ReviewSortField, UpdateReviewRequest},
        responses::{RatingDistribution, ReviewListResponse, ReviewStatsResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建评价
    pub async fn create_review_impl(&self, req: CreateReviewRequest) -> Result<Review> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            reviewer_name: Set(req.reviewer_name),
            role: Set(req.role.to_string()),
            rating: Set(req.rating),
            review_text: Set(req.review_text),
            course_title: Set(req.course_title),
            date: Set(req.date.map(|d| d.timestamp()).unwrap_or(now)),
            status: Set(req.status.unwrap_or(ReviewStatus::Pending).to_string()),
            avatar: Set(req.avatar),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "创建评价失败"))?;

        Ok(result.into_review())
    }

    /// 通过 ID 获取评价
    pub async fn get_review_by_id_impl(&self, id: i64) -> Result<Option<Review>> {
        let result = Reviews::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 分页列出评价
    pub async fn list_reviews_with_pagination_impl(
        &self,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse> {
        let mut select = Reviews::find();

        if let Some(condition) = search_condition(
            query.search.as_deref(),
            &[Column::ReviewerName, Column::CourseTitle, Column::ReviewText],
        ) {
            select = select.filter(condition);
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(rating) = query.rating {
            select = select.filter(Column::Rating.eq(rating));
        }

        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        let sort_expr = match query.sort_by {
            ReviewSortField::ReviewerName => folded(Column::ReviewerName),
            ReviewSortField::Rating => Column::Rating.into_expr(),
            ReviewSortField::Date => Column::Date.into_expr(),
            ReviewSortField::Status => Column::Status.into_expr(),
        };
        select = select
            .order_by(sort_expr, query.order.to_order())
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, query.size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询评价总数失败: {e}")))?;

        // 超出范围的页直接返回空列表
        let reviews = if page_in_range(query.page, query.size, total) {
            paginator
                .fetch_page(query.page - 1)
                .await
                .map_err(|e| TutorHubError::database_operation(format!("查询评价列表失败: {e}")))?
        } else {
            Vec::new()
        };

        Ok(ReviewListResponse {
            items: reviews.into_iter().map(|m| m.into_review()).collect(),
            pagination: PaginationInfo::new(query.page, query.size, total),
        })
    }

    /// 更新评价
    pub async fn update_review_impl(
        &self,
        id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        if self.get_review_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(reviewer_name) = update.reviewer_name {
            model.reviewer_name = Set(reviewer_name);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(rating) = update.rating {
            model.rating = Set(rating);
        }
        if let Some(review_text) = update.review_text {
            model.review_text = Set(review_text);
        }
        if let Some(course_title) = update.course_title {
            model.course_title = Set(course_title);
        }
        if let Some(date) = update.date {
            model.date = Set(date.timestamp());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(avatar) = update.avatar {
            model.avatar = Set(Some(avatar));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "更新评价失败"))?;

        Ok(Some(updated.into_review()))
    }

    /// 删除评价
    pub async fn delete_review_impl(&self, id: i64) -> Result<bool> {
        let result = Reviews::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按状态、评分分组统计
    pub async fn get_review_stats_impl(&self) -> Result<ReviewStatsResponse> {
        let by_status = Reviews::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计评价失败: {e}")))?;

        let by_rating = Reviews::find()
            .select_only()
            .column(Column::Rating)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Rating)
            .into_tuple::<(i32, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计评分失败: {e}")))?;

        let total: i64 = by_status.iter().map(|(_, count)| count).sum();

        let mut rating_distribution = RatingDistribution::default();
        let mut rating_sum = 0i64;
        for (rating, count) in &by_rating {
            rating_distribution.add(*rating, *count);
            rating_sum += i64::from(*rating) * count;
        }

        let average_rating = if total > 0 {
            // 保留两位小数
            ((rating_sum as f64 / total as f64) * 100.0).round() / 100.0
        } else {
            0.0
        };

        Ok(ReviewStatsResponse {
            total,
            average_rating,
            published: count_of(&by_status, ReviewStatus::Published.as_str()),
            pending: count_of(&by_status, ReviewStatus::Pending.as_str()),
            flagged: count_of(&by_status, ReviewStatus::Flagged.as_str()),
            rating_distribution,
        })
    }
}
