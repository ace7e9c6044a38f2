//! 列表查询的公共拼装逻辑

use crate::utils::escape_like_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition};

/// 关键字模糊匹配（忽略大小写）：任一列包含关键字即命中
///
/// 通配符已转义，空白关键字返回 None
pub(super) fn search_condition<C: ColumnTrait>(
    search: Option<&str>,
    columns: &[C],
) -> Option<Condition> {
    let keyword = escape_like_pattern(search.map(str::trim).filter(|s| !s.is_empty())?);
    let lower_pattern = format!("%{}%", keyword.to_lowercase());
    let upper_pattern = format!("%{}%", keyword.to_uppercase());

    // SQLite 的 LOWER/UPPER 只折叠 ASCII，两种方向各比较一次
    let condition = columns.iter().fold(Condition::any(), |cond, column| {
        cond.add(
            Expr::expr(Func::lower(column.into_expr()))
                .like(LikeExpr::new(lower_pattern.clone()).escape('\\')),
        )
        .add(
            Expr::expr(Func::upper(column.into_expr()))
                .like(LikeExpr::new(upper_pattern.clone()).escape('\\')),
        )
    });
    Some(condition)
}

/// 文本列排序时忽略大小写
pub(super) fn folded<C: ColumnTrait>(column: C) -> Expr {
    Expr::expr(Func::lower(column.into_expr()))
}

/// 页码是否落在结果范围内（偏移量溢出视为超出）
pub(super) fn page_in_range(page: u64, size: u64, total: u64) -> bool {
    page.saturating_sub(1)
        .checked_mul(size)
        .is_some_and(|offset| offset < total)
}

/// 将 (取值, 数量) 分组结果按名称累加
pub(super) fn count_of(groups: &[(String, i64)], name: &str) -> i64 {
    groups
        .iter()
        .filter(|(value, _)| value.eq_ignore_ascii_case(name))
        .map(|(_, count)| *count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::students::{Column, Entity as Students};
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn test_blank_search_is_ignored() {
        assert!(search_condition(None, &[Column::Name]).is_none());
        assert!(search_condition(Some("   "), &[Column::Name, Column::Email]).is_none());
        assert!(search_condition(Some("li"), &[Column::Name, Column::Email]).is_some());
    }

    #[test]
    fn test_search_folds_case() {
        let condition = search_condition(Some("Éva"), &[Column::Name]).unwrap();
        let sql = Students::find()
            .filter(condition)
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("LOWER(\"students\".\"name\")"));
        assert!(sql.contains("UPPER(\"students\".\"name\")"));
        assert!(sql.contains("%éva%"));
        assert!(sql.contains("%ÉVA%"));
    }

    #[test]
    fn test_page_in_range() {
        assert!(page_in_range(1, 10, 5));
        assert!(!page_in_range(1, 10, 0));
        assert!(page_in_range(2, 10, 11));
        assert!(!page_in_range(3, 10, 20));
        assert!(!page_in_range(u64::MAX, 100, 5));
        assert!(!page_in_range(i64::MAX as u64, 100, 5));
    }

    #[test]
    fn test_count_of() {
        let groups = vec![("Active".to_string(), 3), ("Inactive".to_string(), 2)];
        assert_eq!(count_of(&groups, "Active"), 3);
        assert_eq!(count_of(&groups, "Pending"), 0);
    }
}
