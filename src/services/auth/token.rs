use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::guard;
use crate::models::{
    ErrorCode,
    auth::{RefreshTokenResponse, UserInfoResponse},
};
use crate::services::guards::{current_user, error_response, stored};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

fn unauthorized(detail: &str) -> HttpResponse {
    error_response(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, detail)
}

/// 使用 cookie 中的 refresh token 换取新的 access token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(unauthorized("Unauthorized access, please login"));
    };

    let claims = match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            return Ok(unauthorized("Login expired or invalid, please login again"));
        }
    };

    // 重新读取用户，角色变更或账号删除后旧 token 不再可用
    let storage = service.get_storage(request);
    let Some(user) = guard!(stored(
        storage.get_user_by_id(&claims.sub).await,
        "Refresh token failed",
    )) else {
        return Ok(unauthorized("User no longer exists"));
    };

    match JwtUtils::generate_access_token(&user.id, &user.role.to_string()) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(RefreshTokenResponse {
            access_token,
            token_type: "Bearer",
            expires_in: JwtUtils::access_token_expires_in(),
        })),
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                "Unable to generate token",
            ))
        }
    }
}

pub async fn handle_get_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    Ok(HttpResponse::Ok().json(UserInfoResponse { user }))
}
