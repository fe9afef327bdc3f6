use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::guard;
use crate::models::ErrorCode;
use crate::services::guards::require_existed;

pub async fn get_user(
    service: &UserService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = guard!(require_existed(
        storage.get_user_by_id(user_id).await,
        ErrorCode::UserNotFound,
        "User",
    ));

    Ok(HttpResponse::Ok().json(user))
}
