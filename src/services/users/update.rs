use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    users::requests::{ChangePasswordRequest, ChangeRoleRequest, UpdateUserRequest},
};
use crate::services::cache_from_request;
use crate::services::guards::{
    bad_request, current_user, require_existed, storage_error, stored, validated,
};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password;

// 用户信息变化后清空缓存，避免 JWT 中间件读到旧数据
async fn invalidate_user_cache(request: &HttpRequest) {
    if let Some(cache) = cache_from_request(request) {
        cache.invalidate_all().await;
    }
}

pub async fn update_me(
    service: &UserService,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    let storage = service.get_storage(request);

    let updated = guard!(require_existed(
        storage.update_user(&user.id, update_data).await,
        ErrorCode::UserNotFound,
        "User",
    ));
    invalidate_user_cache(request).await;

    Ok(HttpResponse::Ok().json(updated))
}

pub async fn change_password(
    service: &UserService,
    password_data: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = guard!(current_user(request));
    let storage = service.get_storage(request);

    // 请求扩展中的用户来自缓存，不含密码哈希，需重新读取
    let stored_user = guard!(require_existed(
        storage.get_user_by_id(&user.id).await,
        ErrorCode::UserNotFound,
        "User",
    ));

    if !verify_password(&password_data.old_password, &stored_user.password_hash) {
        return Ok(bad_request(
            ErrorCode::UserPasswordInvalid,
            "Old password is incorrect",
        ));
    }

    guard!(validated(
        validate_password(&password_data.new_password),
        ErrorCode::UserPasswordInvalid,
    ));

    let password_hash = match hash_password(&password_data.new_password) {
        Ok(hash) => hash,
        Err(e) => return Ok(storage_error("Failed to change password", e)),
    };

    guard!(stored(
        storage.change_user_password(&user.id, password_hash).await,
        "Failed to change password",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Updated")))
}

pub async fn change_role(
    service: &UserService,
    user_id: &str,
    role_data: ChangeRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    guard!(require_existed(
        storage.change_user_role(user_id, role_data.role).await,
        ErrorCode::UserNotFound,
        "User",
    ));
    invalidate_user_cache(request).await;

    Ok(HttpResponse::Ok().json(Detail::new("Updated")))
}
