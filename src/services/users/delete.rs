use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::guard;
use crate::models::{Detail, ErrorCode};
use crate::services::cache_from_request;
use crate::services::guards::{bad_request, current_user, not_found, stored};

pub async fn delete_user(
    service: &UserService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current = guard!(current_user(request));

    // 禁止删除当前登录用户
    if current.id == user_id {
        return Ok(bad_request(
            ErrorCode::CanNotDeleteCurrentUser,
            "Cannot delete current user",
        ));
    }

    let storage = service.get_storage(request);

    if !guard!(stored(
        storage.delete_user(user_id).await,
        "Failed to delete user"
    )) {
        return Ok(not_found(ErrorCode::UserNotFound, "User not found"));
    }

    if let Some(cache) = cache_from_request(request) {
        cache.invalidate_all().await;
    }

    Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
}
