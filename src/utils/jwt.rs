use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // 用户角色
    pub token_type: String, // token类型: "access" 或 "refresh"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

// Token 响应结构体
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token
    pub fn generate_access_token(
        user_id: i64,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user_id,
            role,
            "access",
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成 Refresh Token
    pub fn generate_refresh_token(
        user_id: i64,
        role: &str,
        token_expiry: Option<chrono::Duration>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        match token_expiry {
            Some(expiry) => Self::generate_token_with_expiry(user_id, role, "refresh", expiry),
            None => Self::generate_token_with_expiry(
                user_id,
                role,
                "refresh",
                chrono::Duration::days(config.jwt.refresh_token_expiry),
            ),
        }
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        user_id: i64,
        role: &str,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 生成完整的 Token 响应（包含 access 和 refresh token）
    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_token_expiry: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let access_token = Self::generate_access_token(user_id, role)?;
        let refresh_token = Self::generate_refresh_token(user_id, role, refresh_token_expiry)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 验证 token 是否为指定类型
    pub fn verify_token_type(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, "access")
    }

    // 验证 Refresh Token
    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, "refresh")
    }

    // 使用 Refresh Token 生成新的 Access Token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidToken)?;
        Self::generate_access_token(user_id, &claims.role)
    }

    /// 创建 Access Token Cookie
    pub fn create_access_token_cookie(access_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Self::build_cookie(
            ACCESS_TOKEN_COOKIE,
            access_token.to_string(),
            actix_web::cookie::time::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    /// 创建 Refresh Token Cookie
    pub fn create_refresh_token_cookie(
        refresh_token: &str,
        expiry: chrono::Duration,
    ) -> Cookie<'static> {
        Self::build_cookie(
            REFRESH_TOKEN_COOKIE,
            refresh_token.to_string(),
            actix_web::cookie::time::Duration::seconds(expiry.num_seconds()),
        )
    }

    /// 创建空的 Token Cookie（用于注销）
    pub fn create_empty_cookies() -> [Cookie<'static>; 2] {
        let zero = actix_web::cookie::time::Duration::seconds(0);
        [
            Self::build_cookie(ACCESS_TOKEN_COOKIE, String::new(), zero),
            Self::build_cookie(REFRESH_TOKEN_COOKIE, String::new(), zero),
        ]
    }

    fn build_cookie(
        name: &'static str,
        value: String,
        max_age: actix_web::cookie::time::Duration,
    ) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(name, value)
            .path("/")
            .max_age(max_age)
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.is_production()) // 生产环境下使用 HTTPS
            .finish()
    }

    /// 从请求中提取 Refresh Token
    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 从请求中提取 Access Token：优先 `Authorization: Bearer`，其次 cookie
    pub fn extract_access_token(req: &ServiceRequest) -> Option<String> {
        if let Some(token) = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            return Some(token.to_string());
        }
        req.request()
            .cookie(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 本次登录的 refresh token 有效期
    pub fn refresh_expiry(remember_me: bool) -> chrono::Duration {
        let config = AppConfig::get();
        if remember_me {
            chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
        } else {
            chrono::Duration::days(config.jwt.refresh_token_expiry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let token = JwtUtils::generate_access_token(42, "Tutor").unwrap();
        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "Tutor");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_token_type_is_enforced() {
        let pair = JwtUtils::generate_token_pair(7, "Admin", None).unwrap();
        assert!(JwtUtils::verify_refresh_token(&pair.access_token).is_err());
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
        assert!(JwtUtils::refresh_access_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::generate_token_with_expiry(
            1,
            "Student",
            "access",
            chrono::Duration::minutes(-10),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = JwtUtils::create_access_token_cookie("abc");
        assert_eq!(cookie.name(), ACCESS_TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
