use super::SeaOrmStorage;
use super::query::{count_of, folded, page_in_range, search_condition};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, StudentSortField, UpdateStudentRequest},
        responses::{StudentListResponse, StudentStatsResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            phone: Set(req.phone),
            class_name: Set(req.class_name),
            gender: Set(req.gender.to_string()),
            age: Set(req.age),
            status: Set(req.status.unwrap_or(StudentStatus::Active).to_string()),
            profile_image: Set(req.profile_image),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let mut select = Students::find();

        if let Some(condition) = search_condition(
            query.search.as_deref(),
            &[Column::Name, Column::Email, Column::Phone],
        ) {
            select = select.filter(condition);
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(ref class_name) = query.class_name {
            select = select.filter(Column::ClassName.eq(class_name.trim()));
        }

        if let Some(gender) = query.gender {
            select = select.filter(Column::Gender.eq(gender.to_string()));
        }

        let sort_expr = match query.sort_by {
            StudentSortField::Name => folded(Column::Name),
            StudentSortField::Email => folded(Column::Email),
            StudentSortField::Class => folded(Column::ClassName),
            StudentSortField::Age => Column::Age.into_expr(),
            StudentSortField::Status => Column::Status.into_expr(),
            StudentSortField::CreatedAt => Column::CreatedAt.into_expr(),
        };
        select = select
            .order_by(sort_expr, query.order.to_order())
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, query.size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询学生总数失败: {e}")))?;

        // 超出范围的页直接返回空列表
        let students = if page_in_range(query.page, query.size, total) {
            paginator
                .fetch_page(query.page - 1)
                .await
                .map_err(|e| TutorHubError::database_operation(format!("查询学生列表失败: {e}")))?
        } else {
            Vec::new()
        };

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo::new(query.page, query.size, total),
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }
        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }
        if let Some(age) = update.age {
            model.age = Set(age);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(profile_image) = update.profile_image {
            model.profile_image = Set(Some(profile_image));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "更新学生失败"))?;

        Ok(Some(updated.into_student()))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按状态分组统计
    pub async fn get_student_stats_impl(&self) -> Result<StudentStatsResponse> {
        let by_status = Students::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计学生失败: {e}")))?;

        Ok(StudentStatsResponse {
            total: by_status.iter().map(|(_, count)| count).sum(),
            active: count_of(&by_status, StudentStatus::Active.as_str()),
            inactive: count_of(&by_status, StudentStatus::Inactive.as_str()),
            pending: count_of(&by_status, StudentStatus::Pending.as_str()),
            graduated: count_of(&by_status, StudentStatus::Graduated.as_str()),
        })
    }
}
