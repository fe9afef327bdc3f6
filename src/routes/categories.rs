use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::categories::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::users::entities::UserRole;
use crate::services::CategoryService;
use crate::utils::SafeId;

static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

pub async fn list_categories(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .list_categories(query.into_inner(), &req)
        .await
}

pub async fn create_category(
    req: HttpRequest,
    data: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .create_category(data.into_inner(), &req)
        .await
}

pub async fn update_category(
    req: HttpRequest,
    category_id: SafeId,
    data: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .update_category(&category_id, data.into_inner(), &req)
        .await
}

pub async fn delete_category(req: HttpRequest, category_id: SafeId) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.delete_category(&category_id, &req).await
}

// 写操作仅限非学员角色
fn author_only(route: actix_web::Route) -> actix_web::Route {
    route
        .wrap(middlewares::RequireRole::new_any(UserRole::author_roles()))
        .wrap(middlewares::RequireJWT)
}

pub fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/category")
            .service(
                web::resource("")
                    .route(web::get().to(list_categories))
                    .route(author_only(web::post().to(create_category))),
            )
            .service(
                web::resource("/{id}")
                    .route(author_only(web::put().to(update_category)))
                    .route(author_only(web::delete().to(delete_category))),
            ),
    );
}
