//! 路径参数提取器
//!
//! 路由中的 `{id}` 必须是合法的 UUID，否则直接返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ErrorCode, ErrorResponse};

/// 经过 UUID 校验的路径 `{id}`，统一为小写连字符格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeId(pub String);

impl SafeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(raw)
            .map(|id| SafeId(id.to_string()))
            .map_err(|_| format!("Invalid id: '{raw}' is not a valid UUID"))
    }
}

impl std::ops::Deref for SafeId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl FromRequest for SafeId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .ok_or_else(|| "Missing path parameter: id".to_string())
            .and_then(SafeId::parse)
            .map_err(|msg| {
                let response = HttpResponse::BadRequest()
                    .json(ErrorResponse::new(ErrorCode::BadRequest, msg.clone()));
                InternalError::from_response(msg, response).into()
            });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_normalizes_uuid() {
        let id = SafeId::parse("6F9619FF-8B86-D011-B42D-00C04FC964FF").expect("valid uuid");
        assert_eq!(id.as_str(), "6f9619ff-8b86-d011-b42d-00c04fc964ff");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(SafeId::parse("42").is_err());
        assert!(SafeId::parse("../etc/passwd").is_err());
    }

    #[actix_web::test]
    async fn test_extract_from_path() {
        let req = TestRequest::default()
            .param("id", "6f9619ff-8b86-d011-b42d-00c04fc964ff")
            .to_http_request();
        let id = SafeId::extract(&req).await.expect("valid id");
        assert_eq!(&*id, "6f9619ff-8b86-d011-b42d-00c04fc964ff");

        let req = TestRequest::default().param("id", "abc").to_http_request();
        assert!(SafeId::extract(&req).await.is_err());
    }
}
