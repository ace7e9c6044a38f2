//! 安全的路径参数提取器
//!
//! 路径中的 `{id}` 必须为正整数，否则直接返回 400 与统一响应结构。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径参数 `{id}`（正整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

/// 解析正整数 ID
pub(crate) fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        match parse_positive_id(raw) {
            Some(id) => ready(Ok(SafeIDI64(id))),
            None => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParameter,
                    format!("Invalid id: '{raw}'"),
                ));
                ready(Err(InternalError::from_response("invalid id", response).into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42"), Some(42));
        assert_eq!(parse_positive_id("0"), None);
        assert_eq!(parse_positive_id("-3"), None);
        assert_eq!(parse_positive_id("abc"), None);
        assert_eq!(parse_positive_id("1; DROP TABLE"), None);
    }
}
