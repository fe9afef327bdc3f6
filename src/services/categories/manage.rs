use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CategoryService;
use crate::guard;
use crate::models::{
    Detail, ErrorCode,
    categories::requests::{CreateCategoryRequest, UpdateCategoryRequest},
};
use crate::services::guards::{require_existed, stored, validated};
use crate::utils::validate::validate_not_blank;

pub async fn create_category(
    service: &CategoryService,
    data: CreateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    guard!(validated(
        validate_not_blank("name", &data.name),
        ErrorCode::ValidationFailed,
    ));

    let storage = service.get_storage(request);
    let category = guard!(stored(
        storage.create_category(data).await,
        "Failed to create category",
    ));

    Ok(HttpResponse::Created().json(Detail::new(category.id)))
}

pub async fn update_category(
    service: &CategoryService,
    category_id: &str,
    data: UpdateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &data.name {
        guard!(validated(
            validate_not_blank("name", name),
            ErrorCode::ValidationFailed,
        ));
    }

    let storage = service.get_storage(request);
    guard!(require_existed(
        storage.update_category(category_id, data).await,
        ErrorCode::CategoryNotFound,
        "Category",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Updated")))
}

pub async fn delete_category(
    service: &CategoryService,
    category_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    guard!(require_existed(
        storage.get_category_by_id(category_id).await,
        ErrorCode::CategoryNotFound,
        "Category",
    ));
    guard!(stored(
        storage.delete_category(category_id).await,
        "Failed to delete category",
    ));

    Ok(HttpResponse::Ok().json(Detail::new("Deleted")))
}
