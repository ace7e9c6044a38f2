use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单页最大条数
pub const MAX_PAGE_SIZE: i64 = 100;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        alias = "perPage",
        alias = "per_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

impl PaginationQuery {
    /// 规范化后的页码（最小为 1）
    pub fn page(&self) -> u64 {
        self.page.max(1) as u64
    }

    /// 规范化后的每页条数（1..=100）
    pub fn size(&self) -> u64 {
        self.size.clamp(1, MAX_PAGE_SIZE) as u64
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            page: page as i64,
            page_size: page_size as i64,
            total: total as i64,
            total_pages: total_pages as i64,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(I64Visitor)
}

/// 可选整数参数（查询字符串中 flatten 后的值均为字符串）
pub(crate) fn deserialize_optional_string_to_i64<'de, D>(
    deserializer: D,
) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Visitor};
    use std::fmt;

    struct OptionalI64Visitor;

    impl<'de> Visitor<'de> for OptionalI64Visitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional integer or a string containing an integer")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(I64Visitor).map(Some)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            I64Visitor.visit_i64(value).map(Some)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            I64Visitor.visit_u64(value).map(Some)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value.is_empty() {
                return Ok(None);
            }
            I64Visitor.visit_str(value).map(Some)
        }
    }

    deserializer.deserialize_option(OptionalI64Visitor)
}

struct I64Visitor;

impl<'de> serde::de::Visitor<'de> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value <= i64::MAX as u64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(
                serde::de::Unexpected::Unsigned(value),
                &self,
            ))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_accepts_strings_and_aliases() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page":"3","perPage":"25"}"#).unwrap();
        assert_eq!(q.page(), 3);
        assert_eq!(q.size(), 25);

        let q: PaginationQuery = serde_json::from_str(r#"{"per_page":7}"#).unwrap();
        assert_eq!(q.page(), 1);
        assert_eq!(q.size(), 7);
    }

    #[test]
    fn test_query_is_clamped() {
        let q = PaginationQuery { page: -4, size: 1000 };
        assert_eq!(q.page(), 1);
        assert_eq!(q.size(), MAX_PAGE_SIZE as u64);

        let q = PaginationQuery { page: 2, size: 0 };
        assert_eq!(q.size(), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(PaginationInfo::new(1, 10, 0).total_pages, 0);
        assert_eq!(PaginationInfo::new(1, 10, 10).total_pages, 1);
        assert_eq!(PaginationInfo::new(1, 10, 11).total_pages, 2);
        assert_eq!(PaginationInfo::new(2, 3, 7).total_pages, 3);
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(serde_json::from_str::<PaginationQuery>(r#"{"page":"abc"}"#).is_err());
    }
}
