use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::guard;
use crate::models::{
    ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::services::guards::{error_response, stored};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

fn login_failed() -> HttpResponse {
    error_response(
        StatusCode::UNAUTHORIZED,
        ErrorCode::AuthFailed,
        "Username or password is incorrect",
    )
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 用户名或邮箱均可登录
    let user = guard!(stored(
        storage
            .get_user_by_username_or_email(&login_request.username)
            .await,
        "Login failed",
    ));

    let Some(user) = user else {
        return Ok(login_failed());
    };

    if !verify_password(&login_request.password, &user.password_hash) {
        tracing::info!("Failed login attempt for user {}", user.username);
        return Ok(login_failed());
    }

    let token_pair = match JwtUtils::generate_token_pair(
        &user.id,
        &user.role.to_string(),
        login_request.remember_me,
    ) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            return Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                "Login failed, unable to generate token",
            ));
        }
    };

    tracing::info!("User {} logged in successfully", user.username);

    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, login_request.remember_me);

    Ok(HttpResponse::Ok().cookie(refresh_cookie).json(LoginResponse {
        access_token: token_pair.access_token,
        token_type: "Bearer",
        expires_in: JwtUtils::access_token_expires_in(),
        user,
    }))
}
