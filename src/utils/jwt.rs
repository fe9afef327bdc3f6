use crate::config::{AppConfig, JwtConfig};
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN: &str = "access";
pub const REFRESH_TOKEN: &str = "refresh";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 用户 UUID
    pub role: String,       // 用户角色
    pub token_type: String, // access / refresh
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn config() -> &'static JwtConfig {
        &AppConfig::get().jwt
    }

    /// Access Token 有效期（秒）
    pub fn access_token_expires_in() -> i64 {
        Self::config().access_token_expiry * 60
    }

    pub fn generate_access_token(
        user_id: &str,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with_expiry(
            user_id,
            role,
            ACCESS_TOKEN,
            chrono::Duration::minutes(Self::config().access_token_expiry),
        )
    }

    /// 生成 Refresh Token，`remember_me` 时使用更长的有效期
    pub fn generate_refresh_token(
        user_id: &str,
        role: &str,
        remember_me: bool,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with_expiry(
            user_id,
            role,
            REFRESH_TOKEN,
            chrono::Duration::days(Self::refresh_token_days(remember_me)),
        )
    }

    fn refresh_token_days(remember_me: bool) -> i64 {
        let config = Self::config();
        if remember_me {
            config.refresh_token_remember_me_expiry
        } else {
            config.refresh_token_expiry
        }
    }

    pub fn generate_token_with_expiry(
        user_id: &str,
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

        let encoding_key = EncodingKey::from_secret(Self::config().secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
    }

    pub fn generate_token_pair(
        user_id: &str,
        role: &str,
        remember_me: bool,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::generate_refresh_token(user_id, role, remember_me)?,
        })
    }

    /// 校验签名与过期时间，并要求 token 类型匹配
    pub fn verify_token_type(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(Self::config().secret.as_bytes());
        let claims = decode::<Claims>(token, &decoding_key, &Validation::default())?.claims;

        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, ACCESS_TOKEN)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, REFRESH_TOKEN)
    }

    pub fn create_refresh_token_cookie(refresh_token: &str, remember_me: bool) -> Cookie<'static> {
        Cookie::build(REFRESH_TOKEN_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                Self::refresh_token_days(remember_me),
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ID: &str = "6f9619ff-8b86-d011-b42d-00c04fc964ff";

    #[test]
    fn test_access_token_roundtrip() {
        let token = JwtUtils::generate_access_token(USER_ID, "EXPERT").expect("sign");
        let claims = JwtUtils::verify_access_token(&token).expect("verify");
        assert_eq!(claims.sub, USER_ID);
        assert_eq!(claims.role, "EXPERT");
        assert_eq!(claims.token_type, ACCESS_TOKEN);
    }

    #[test]
    fn test_token_type_is_enforced() {
        let pair = JwtUtils::generate_token_pair(USER_ID, "USER", false).expect("sign");
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.access_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::generate_token_with_expiry(
            USER_ID,
            "USER",
            ACCESS_TOKEN,
            chrono::Duration::minutes(-10),
        )
        .expect("sign");
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }
}
