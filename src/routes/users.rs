use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::EnrollmentSearchParams;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{
    ChangePasswordRequest, ChangeRoleRequest, UpdateUserRequest, UserListParams,
};
use crate::services::UserService;
use crate::utils::SafeId;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeId) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&user_id, &req).await
}

pub async fn update_me(
    req: HttpRequest,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.update_me(update_data.into_inner(), &req).await
}

pub async fn change_password(
    req: HttpRequest,
    password_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .change_password(password_data.into_inner(), &req)
        .await
}

pub async fn list_my_courses(
    req: HttpRequest,
    query: web::Query<EnrollmentSearchParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_my_courses(query.into_inner(), &req).await
}

pub async fn change_role(
    req: HttpRequest,
    user_id: SafeId,
    role_data: web::Json<ChangeRoleRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .change_role(&user_id, role_data.into_inner(), &req)
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeId) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&user_id, &req).await
}

// 仅 STAFF 可管理用户
fn staff_only(route: actix_web::Route) -> actix_web::Route {
    route
        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
        .wrap(middlewares::RequireJWT)
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/user")
            .service(web::resource("").route(staff_only(web::get().to(list_users))))
            // /me 必须在 /{id} 之前注册
            .service(
                web::resource("/me")
                    .route(web::put().to(update_me).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/me/password")
                    .route(web::put().to(change_password).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/me/course")
                    .route(web::get().to(list_my_courses).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_user))
                    .route(staff_only(web::delete().to(delete_user))),
            )
            .service(web::resource("/{id}/role").route(staff_only(web::put().to(change_role)))),
    );
}
