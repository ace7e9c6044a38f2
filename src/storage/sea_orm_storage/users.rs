use super::SeaOrmStorage;
use super::query::{count_of, folded, page_in_range, search_condition};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery, UserSortField},
        responses::{UserListResponse, UserRoleCounts, UserStatsResponse, UserStatusCounts},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(req.status.unwrap_or(UserStatus::Active).to_string()),
            avatar_url: Set(req.avatar_url),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "创建用户失败"))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let mut select = Users::find();

        // 搜索条件
        if let Some(condition) =
            search_condition(query.search.as_deref(), &[Column::Name, Column::Email])
        {
            select = select.filter(condition);
        }

        // 角色筛选
        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 排序（id 升序作为稳定的次序）
        let sort_expr = match query.sort_by {
            UserSortField::Name => folded(Column::Name),
            UserSortField::Email => folded(Column::Email),
            UserSortField::Role => Column::Role.into_expr(),
            UserSortField::Status => Column::Status.into_expr(),
            UserSortField::JoinedAt => Column::CreatedAt.into_expr(),
        };
        select = select
            .order_by(sort_expr, query.order.to_order())
            .order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, query.size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorHubError::database_operation(format!("查询用户总数失败: {e}")))?;

        // 超出范围的页直接返回空列表
        let users = if page_in_range(query.page, query.size, total) {
            paginator
                .fetch_page(query.page - 1)
                .await
                .map_err(|e| TutorHubError::database_operation(format!("查询用户列表失败: {e}")))?
        } else {
            Vec::new()
        };

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo::new(query.page, query.size, total),
        })
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息（password 字段须为已哈希的值）
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        // 先检查用户是否存在
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(avatar_url) = update.avatar_url {
            model.avatar_url = Set(Some(avatar_url));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| TutorHubError::from_db_err(e, "更新用户失败"))?;

        Ok(Some(updated.into_user()))
    }

    /// 删除用户（用户设置随外键级联删除）
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }

    /// 按角色与状态分组统计
    pub async fn get_user_stats_impl(&self) -> Result<UserStatsResponse> {
        let by_role = self.group_users_by(Column::Role).await?;
        let by_status = self.group_users_by(Column::Status).await?;

        Ok(UserStatsResponse {
            total: by_role.iter().map(|(_, count)| count).sum(),
            by_role: UserRoleCounts {
                student: count_of(&by_role, UserRole::Student.as_str()),
                tutor: count_of(&by_role, UserRole::Tutor.as_str()),
                admin: count_of(&by_role, UserRole::Admin.as_str()),
            },
            by_status: UserStatusCounts {
                active: count_of(&by_status, UserStatus::Active.as_str()),
                trial: count_of(&by_status, UserStatus::Trial.as_str()),
                inactive: count_of(&by_status, UserStatus::Inactive.as_str()),
            },
        })
    }

    async fn group_users_by(&self, column: Column) -> Result<Vec<(String, i64)>> {
        Users::find()
            .select_only()
            .column(column)
            .column_as(Column::Id.count(), "count")
            .group_by(column)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("统计用户失败: {e}")))
    }
}
