use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CategoryService;
use crate::guard;
use crate::models::PaginationQuery;
use crate::services::guards::stored;

// 分类数量通常很少，默认一次返回 100 条
const DEFAULT_LIMIT: u64 = 100;

pub async fn list_categories(
    service: &CategoryService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let categories = guard!(stored(
        storage.list_categories(query.page(DEFAULT_LIMIT)).await,
        "Failed to list categories",
    ));

    Ok(HttpResponse::Ok().json(categories))
}
