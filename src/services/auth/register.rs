use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::services::guards::{conflict, storage_error, stored, validated};
use crate::utils::password::hash_password;

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    guard!(validated(create_request.validate(), ErrorCode::RegisterFailed));

    let storage = service.get_storage(request);

    if guard!(stored(
        storage.get_user_by_username(&create_request.username).await,
        "Registration failed",
    ))
    .is_some()
    {
        return Ok(conflict(
            ErrorCode::UserNameAlreadyExists,
            "Username already exists",
        ));
    }

    if guard!(stored(
        storage.get_user_by_email(&create_request.email).await,
        "Registration failed",
    ))
    .is_some()
    {
        return Ok(conflict(
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists",
        ));
    }

    let password_hash = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(storage_error("Registration failed", e)),
    };

    // 自助注册的账号均为普通学员
    match storage
        .create_user(create_request, password_hash, UserRole::User)
        .await
    {
        Ok(user) => {
            tracing::info!("User {} registered", user.username);
            Ok(HttpResponse::Created().json(Detail::new(user.id)))
        }
        Err(e) => Ok(storage_error("Registration failed", e)),
    }
}
