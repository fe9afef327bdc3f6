//! 请求体 / 查询参数解析失败时的统一响应
//!
//! 将 serde 的错误信息原样放入 `detail`，返回 400。

use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ErrorCode, ErrorResponse};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let detail = match &err {
        JsonPayloadError::Deserialize(e) => e.to_string(),
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        other => other.to_string(),
    };
    debug!("Invalid JSON body for {}: {}", req.path(), detail);

    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::ValidationFailed, &detail));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let detail = match &err {
        QueryPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    };
    debug!("Invalid query string for {}: {}", req.path(), detail);

    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::ValidationFailed, &detail));
    InternalError::from_response(err, response).into()
}
