pub mod courses;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::EnrollmentSearchParams;
use crate::models::users::requests::{
    ChangePasswordRequest, ChangeRoleRequest, UpdateUserRequest, UserListParams,
};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 获取用户列表
    pub async fn list_users(
        &self,
        query: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, query, request).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, user_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    // 更新当前用户资料
    pub async fn update_me(
        &self,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_me(self, update_data, request).await
    }

    // 修改当前用户密码
    pub async fn change_password(
        &self,
        password_data: ChangePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::change_password(self, password_data, request).await
    }

    // 当前用户已选课程
    pub async fn list_my_courses(
        &self,
        query: EnrollmentSearchParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::list_my_courses(self, query, request).await
    }

    // 修改用户角色
    pub async fn change_role(
        &self,
        user_id: &str,
        role_data: ChangeRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::change_role(self, user_id, role_data, request).await
    }

    // 删除用户
    pub async fn delete_user(
        &self,
        user_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, user_id, request).await
    }
}
