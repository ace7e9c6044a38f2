use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn to_order(self) -> sea_orm::Order {
        match self {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse() {
        let asc: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(asc, SortOrder::Asc);
        assert!(serde_json::from_str::<SortOrder>("\"sideways\"").is_err());
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
