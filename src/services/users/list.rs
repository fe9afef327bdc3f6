use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::guard;
use crate::models::users::requests::UserListParams;
use crate::services::guards::stored;

const DEFAULT_LIMIT: u64 = 10;

pub async fn list_users(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let page = query.pagination.page(DEFAULT_LIMIT);

    let users = guard!(stored(
        storage.list_users(query.search.as_deref(), page).await,
        "Failed to list users",
    ));

    Ok(HttpResponse::Ok().json(users))
}
