use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 写操作统一返回 {"detail": ...}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// 错误响应：detail 为人类可读信息，code 为业务错误码
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: ErrorCode,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_numeric_code() {
        let body = serde_json::to_value(ErrorResponse::new(ErrorCode::CourseNotFound, "nope"))
            .expect("serialize");
        assert_eq!(body["code"], 3100);
        assert_eq!(body["detail"], "nope");
    }

    #[test]
    fn test_detail_shape() {
        let body = serde_json::to_string(&Detail::new("Deleted")).expect("serialize");
        assert_eq!(body, r#"{"detail":"Deleted"}"#);
    }
}
